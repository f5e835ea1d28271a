// crates/ports/src/progress.rs
use batch_files_shared_kernel::{FileSize, Result};

/// Receives the user-visible events of a run, in processing order.
pub trait ProgressSink: Send + Sync {
    /// Fired once after enumeration and filtering, before any copy.
    fn on_found(&self, count: usize) -> Result<()>;

    /// Fired after each successful copy.
    fn on_copied(&self, name: &str, folder: &str) -> Result<()>;

    /// Fired once after every group completed, including empty runs.
    fn on_complete(&self, files: usize, folders: usize, bytes: FileSize) -> Result<()>;
}
