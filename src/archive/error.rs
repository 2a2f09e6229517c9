use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Source is not a readable directory: {0}")]
    SourceNotADirectory(PathBuf),

    #[error("Cannot place an archive next to {0}: it has no parent directory")]
    NoParentDirectory(PathBuf),

    #[error("Invalid entry path: {0}")]
    InvalidEntryPath(String),

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
