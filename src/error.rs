use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("File \"{}\" not found.", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TranscodeError>;
