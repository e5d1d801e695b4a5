use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("cannot read sample list {}", path.display())]
    ReadSamples {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("sample list {} is empty", path.display())]
    EmptySampleList { path: PathBuf },
    #[error("line {line}: expected at least 9 tab-separated fields, found {fields}")]
    TruncatedLine { line: usize, fields: usize },
    #[error("line {line}: no genotype column for sample {sample}")]
    MissingGenotype { line: usize, sample: String },
}
