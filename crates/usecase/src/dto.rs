use batch_files_domain::model::FolderName;
use batch_files_shared_kernel::{FileName, FileSize};
use serde::Serialize;

/// One successfully copied file and the folder it was assigned to.
#[derive(Debug, Clone, Serialize)]
pub struct CopiedFile {
    pub name: FileName,
    pub folder: FolderName,
    pub bytes: FileSize,
}

/// One file that failed to copy (keep-going mode only).
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub name: FileName,
    pub folder: FolderName,
    pub error: String,
}

/// Aggregate result of a batch copy run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub copied: Vec<CopiedFile>,
    pub failed: Vec<FailedFile>,
    /// Total number of destination folders, `ceil(n / group_size)`.
    pub groups: usize,
    /// Total bytes written across all successful copies.
    pub bytes: FileSize,
}

impl RunReport {
    /// True when no per-file failure was recorded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
