use crate::ports::outbound::{InventoryReader, InventorySource};
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Maximum inventory size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter reading the inventory from a file or stdin
///
/// Implements the InventoryReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| GraphError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(GraphError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "Security: inventory path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(GraphError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "Not a regular file".to_string(),
            }
            .into());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(GraphError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: format!(
                    "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            GraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads stdin up to the size limit
    fn read_stdin(&self) -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .take(MAX_FILE_SIZE + 1)
            .read_to_string(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read inventory from stdin: {}", e))?;

        if content.len() as u64 > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: inventory on stdin exceeds the maximum allowed size of {} bytes.",
                MAX_FILE_SIZE
            );
        }

        Ok(content)
    }
}

impl InventoryReader for FileSystemReader {
    fn read_inventory(&self, source: &InventorySource) -> Result<String> {
        match source {
            InventorySource::Stdin => self.read_stdin(),
            InventorySource::File(path) => {
                if !path.exists() {
                    return Err(GraphError::InventoryNotFound {
                        path: path.clone(),
                        suggestion: format!(
                            "\"{}\" does not exist. Pass the package inventory JSON with --input, or pipe it on stdin.",
                            path.display()
                        ),
                    }
                    .into());
                }

                self.safe_read_file(path)
            }
        }
    }
}
