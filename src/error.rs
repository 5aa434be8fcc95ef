use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelDnaError {
    #[error("No input path given")]
    MissingArgument,

    #[error("Could not read input [{}]: {}", .path.display(), .reason)]
    UnreadableInput { path: PathBuf, reason: String },

    #[error("No bases found in [{}]", .path.display())]
    EmptyInput { path: PathBuf },

    #[error(
        "Failed to write [{}]: {}. Check write permissions or disk space.",
        .path.display(),
        .reason
    )]
    WriteFailure { path: PathBuf, reason: String },
}

impl PixelDnaError {
    pub(crate) fn unreadable<P, E>(path: P, reason: E) -> Self
    where
        P: Into<PathBuf>,
        E: ToString,
    {
        PixelDnaError::UnreadableInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write_failure<P, E>(path: P, reason: E) -> Self
    where
        P: Into<PathBuf>,
        E: ToString,
    {
        PixelDnaError::WriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PixelDnaError>;
