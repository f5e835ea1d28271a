// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use batch_files_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// DTO representing a regular file discovered directly inside the source
/// directory. Extension filtering and ordering are domain concerns and happen
/// above this port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileDto {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Port for listing the source directory.
///
/// The listing is a single snapshot of the directory's direct entries;
/// subdirectories are never descended into and symlinks are not followed.
pub trait SourceLister: Send + Sync {
    fn collect(&self, source_dir: &Path) -> Result<Vec<SourceFileDto>>;
}

/// Port for mutating the destination tree.
pub trait DestinationWriter: Send + Sync {
    /// Create `dir` and any missing parents. Idempotent.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;

    /// Copy `from` to `to` byte-for-byte, overwriting `to` if it exists.
    /// Returns the number of bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64>;
}
