use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Longest directory argument accepted, in bytes.
pub const MAX_PATH_LEN: usize = 4096;

/// Metadata lookup failure for a single entry. Never fatal.
#[derive(Debug, Error)]
#[error("cannot stat '{}': {source}", path.display())]
pub struct LookupError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("path is too long ({len} bytes, limit is {max})", max = MAX_PATH_LEN)]
    PathTooLong { len: usize },

    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::PathTooLong { .. } | AppError::Io(_) => ExitCode::from(1),
            AppError::DirectoryOpen { .. } | AppError::NotADirectory { .. } => ExitCode::from(2),
        }
    }
}
