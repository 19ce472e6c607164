//! Backing store for the `/files/<name>` route.
//!
//! Names resolve directly under the configured directory. Names that could
//! escape it are refused before touching the filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Why a file name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// `.` or `..`
    Traversal,
    /// Contains a NUL or a path separator
    InvalidCharacter,
}

/// Maps a file name onto a path under `directory`.
///
/// An empty name resolves to the directory itself, which then fails to read
/// or write like any other unusable path.
pub fn resolve(directory: Option<&str>, name: &str) -> Result<PathBuf, NameError> {
    if name == "." || name == ".." {
        return Err(NameError::Traversal);
    }
    if name.contains(['\0', '/', '\\']) {
        return Err(NameError::InvalidCharacter);
    }

    Ok(match directory {
        Some(dir) if !dir.is_empty() => Path::new(dir).join(name),
        _ => PathBuf::from(name),
    })
}

/// Reads the whole file. `Ok(None)` means it does not exist.
pub async fn read_file(path: &Path) -> anyhow::Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Creates or truncates the file and writes `contents` verbatim.
pub async fn write_file(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
