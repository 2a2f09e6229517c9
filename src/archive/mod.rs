mod error;
mod path;


pub use error::ArchiveError;
pub use path::entry_name;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// File extension for archives produced by this module
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Zip every regular file under `source_dir` into a fresh archive at
/// `output_path`.
///
/// Entry names are relative to `source_dir` and use forward slashes on
/// every platform. Directories contribute no entries of their own, so empty
/// directories are absent from the archive. Symlinks and other special
/// nodes are skipped, and links are never followed.
///
/// A pre-existing file at `output_path` is deleted before the source tree
/// is walked; the walk completes before the archive is opened for writing,
/// so the output can never be archived into itself.
///
/// On failure a partially written archive may remain at `output_path` and
/// must not be trusted.
pub fn archive_dir(source_dir: &Path, output_path: &Path) -> Result<(), ArchiveError> {
    if !source_dir.is_dir() {
        return Err(ArchiveError::SourceNotADirectory(source_dir.to_path_buf()));
    }

    if output_path.exists() {
        fs::remove_file(output_path)?;
    }

    let entries = collect_entries(source_dir)?;
    log::debug!(
        "Archiving {} files from {} into {}",
        entries.len(),
        source_dir.display(),
        output_path.display()
    );

    let output = File::create(output_path)?;
    let mut zip = ZipWriter::new(output);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (file_path, name) in entries {
        zip.start_file(name, options)?;
        let mut input = File::open(&file_path)?;
        io::copy(&mut input, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

/// Package each input directory's parent tree into an index-named archive.
///
/// The archive for `zippable_dirs[i]` is written to
/// `<parent of zippable_dirs[i]>/<i>.zip`, with the parent directory as the
/// archive root. Any stale archive at a computed path is deleted before the
/// walk begins. Returns the archive paths in input order.
pub fn create_archives(zippable_dirs: &[PathBuf]) -> Result<Vec<PathBuf>, ArchiveError> {
    let mut archives = Vec::with_capacity(zippable_dirs.len());

    for (index, dir) in zippable_dirs.iter().enumerate() {
        let unit_root = dir
            .parent()
            .ok_or_else(|| ArchiveError::NoParentDirectory(dir.clone()))?;
        let archive_path = unit_root.join(format!("{}.{}", index, ARCHIVE_EXTENSION));

        archive_dir(unit_root, &archive_path)?;
        archives.push(archive_path);
    }

    Ok(archives)
}

/// Walk the source tree and pair every regular file with its entry name.
fn collect_entries(source_dir: &Path) -> Result<Vec<(PathBuf, String)>, ArchiveError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(source_dir) {
        let entry = entry?;

        // Regular files only; a symlink is reported as a symlink here
        // because links are not followed
        if !entry.file_type().is_file() {
            continue;
        }

        let name = path::entry_name(source_dir, entry.path())?;
        entries.push((entry.into_path(), name));
    }

    Ok(entries)
}
