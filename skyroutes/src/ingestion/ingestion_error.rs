use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum IngestionError {
    #[error("failed to open airports file {path:?}: {source}")]
    OpenFailed { path: PathBuf, source: csv::Error },
    #[error("malformed airport row at line {line}: {source}")]
    MalformedRow { line: u64, source: csv::Error },
}
