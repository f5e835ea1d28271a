// crates/infra/src/persistence/report_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use batch_files_shared_kernel::path::logical_absolute;
use batch_files_shared_kernel::{InfraResult, InfrastructureError};

/// Writes the serialized run report to disk.
pub struct ReportWriter;

impl ReportWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn write_atomic(path: &Path, data: &[u8]) -> InfraResult<()> {
        // A bare file name has no parent component; anchor it first.
        let path = logical_absolute(path);
        let wrap = |source: std::io::Error| InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| wrap(std::io::Error::other("path has no parent")))?;
        fs::create_dir_all(parent).map_err(wrap)?;

        // Unique temp name in the same directory so the rename stays atomic.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp).map_err(wrap)?;
        let mut w = BufWriter::new(file);
        w.write_all(data).map_err(wrap)?;
        w.flush().map_err(wrap)?;
        let _ = w.get_ref().sync_all();

        fs::rename(&tmp, &path).map_err(wrap)?;

        // Attempt to sync the parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
