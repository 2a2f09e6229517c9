// Public API exports
pub mod archive;
pub mod sdk;

// Re-export main types for convenience
pub use archive::{archive_dir, create_archives, ArchiveError, ARCHIVE_EXTENSION};

pub use sdk::{locate_jarsigner, Host, JavaRuntime, SdkEnvironment};
