use clap::Parser;
use vcf_sample_pad::{run, Args};

fn main() {
    let args = Args::parse();

    // stdout carries the VCF, so logs go to stderr. RUST_LOG=info for a summary.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
