// Read a VCF from stdin and align its genotype columns to a reference sample list

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod error;
pub mod remapper;
pub mod samples;
pub mod utils;

pub use error::PadError;
pub use remapper::{ColumnRemapper, LineKind, RemapSummary};
pub use samples::ReferenceSamples;

#[derive(Parser)]
#[command(
    version = "0.1.0",
    about = "Align the genotype columns of a .vcf on stdin to a reference sample list",
    long_about = None
)]
#[command(styles=get_styles())]
pub struct Args {
    /// file with the reference sample names on one tab-separated line
    #[arg(value_parser = samples_file_validator)]
    pub samples: PathBuf,
}

pub fn run(args: Args) -> Result<RemapSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    pad_samples(&args.samples, stdin.lock(), &mut writer)
}

/// Load the sample list at `samples` and remap `reader` into `writer`.
pub fn pad_samples<R, W>(samples: &Path, reader: R, writer: &mut W) -> Result<RemapSummary>
where
    R: BufRead,
    W: Write,
{
    let reference = ReferenceSamples::load(samples)?;
    log::info!(
        "{} reference samples read from {}",
        reference.len(),
        samples.display()
    );
    let mut remapper = ColumnRemapper::new(reference);
    let summary = utils::exit_on_broken_pipe(
        remapper
            .remap_stream(reader, &mut *writer)
            .and_then(|x| writer.flush().map(|_| x).map_err(PadError::from)),
    )
    .context("failed to remap VCF from stdin")?;
    log::info!(
        "{} meta lines, {} header lines, {} records written",
        summary.meta,
        summary.headers,
        summary.records
    );
    Ok(summary)
}

fn samples_file_validator(fname: &str) -> Result<PathBuf, String> {
    let path = Path::new(fname);
    if !path.exists() {
        return Err(format!("sample file {fname} does not exist"));
    }
    if path.is_dir() {
        return Err(format!("sample file {fname} is a directory"));
    }
    Ok(path.to_path_buf())
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}
