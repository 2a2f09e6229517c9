use crate::archive::ArchiveError;
use std::path::{Component, Path};

/// Compute the archive entry name for `file` relative to `root`.
///
/// The root prefix is stripped and the remaining components are rejoined
/// with forward slashes, so names come out identical on every platform.
/// Names are never empty and never begin with a separator. Returns an error
/// for the root itself, for a file outside the root, and for components
/// that are not valid UTF-8.
pub fn entry_name(root: &Path, file: &Path) -> Result<String, ArchiveError> {
    let relative = file.strip_prefix(root).map_err(|_| {
        ArchiveError::InvalidEntryPath(format!(
            "{} is not under {}",
            file.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    ArchiveError::InvalidEntryPath(format!("Invalid UTF-8 in path: {:?}", part))
                })?;
                parts.push(part);
            }
            // Harmless; "./a" and "a" name the same file
            Component::CurDir => continue,
            _ => {
                return Err(ArchiveError::InvalidEntryPath(format!(
                    "Unexpected component in {}",
                    relative.display()
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(ArchiveError::InvalidEntryPath(format!(
            "{} leaves an empty entry name",
            file.display()
        )));
    }

    Ok(parts.join("/"))
}
