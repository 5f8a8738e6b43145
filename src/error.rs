use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ArbolError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}
impl ArbolError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArbolError::Io {
            path: path.into(),
            source,
        }
    }
}
