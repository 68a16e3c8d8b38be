use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to emit page: {0}")]
    Output(#[source] std::io::Error),
    #[error("no free file name for {stem} after {attempts} attempts")]
    NameExhausted { stem: String, attempts: u32 },
    #[error("none of the {requested} requested pages were written")]
    NothingWritten { requested: usize },
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io { path: path.into(), source }
    }
}
