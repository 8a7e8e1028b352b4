use crate::error::WriteError;
use crate::resolver::ResolvedEntry;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Canonical on-disk form of a template: `\n` line endings and no
/// surrounding whitespace.
pub fn normalize_content(content: &str) -> Cow<'_, str> {
    let content = if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    };

    match content {
        Cow::Borrowed(borrowed) => Cow::Borrowed(borrowed.trim()),
        Cow::Owned(owned) => Cow::Owned(owned.trim().to_string()),
    }
}

/// Writes resolved entries beneath an output directory.
///
/// Existing files are overwritten, so running twice against the same
/// project leaves an identical tree.
#[derive(Debug, Clone)]
pub struct FileWriter {
    output_dir: PathBuf,
}

impl FileWriter {
    /// Creates a writer rooted at `output_dir`, made absolute against the
    /// current working directory.
    pub fn new(output_dir: &Path) -> Result<Self, WriteError> {
        let output_dir =
            std::path::absolute(output_dir).map_err(|source| WriteError::OutputDirectory {
                path: output_dir.to_path_buf(),
                source,
            })?;

        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes a single entry and returns the absolute path it landed on.
    #[tracing::instrument(skip_all, fields(path = ?entry.path))]
    pub fn write(&self, entry: &ResolvedEntry<'_>) -> Result<PathBuf, WriteError> {
        let destination = self.output_dir.join(&entry.path);

        if destination.is_dir() {
            error!("Destination exists as a directory");
            return Err(WriteError::TypeConflict { path: destination });
        }

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|source| {
                error!(%source, "Failed to create parent directory");
                WriteError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                }
            })?;
        }

        let content = normalize_content(entry.content);
        Self::write_file(&destination, content.as_bytes()).map_err(|source| {
            error!(%source, "Failed to write file");
            WriteError::WriteFile {
                path: destination.clone(),
                source,
            }
        })?;

        debug!(bytes = content.len(), "File written");
        Ok(destination)
    }

    // The handle is dropped, and therefore closed, on every return path.
    fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.flush()
    }
}
