use batch_files_ports::progress::ProgressSink;
use batch_files_shared_kernel::{FileSize, Result};

/// Console sink emitting the user-visible progress lines.
///
/// Per-file lines go to stdout so they can be piped; the pre-copy diagnostic
/// goes to stderr. The terminal summary is suppressed when the caller renders
/// its own (JSON mode).
#[derive(Debug)]
pub struct ConsoleProgress {
    quiet: bool,
    summary: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool, summary: bool) -> Self {
        Self { quiet, summary }
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_found(&self, count: usize) -> Result<()> {
        eprintln!("Found {count} matching files.");
        Ok(())
    }

    fn on_copied(&self, name: &str, folder: &str) -> Result<()> {
        if !self.quiet {
            println!("Copied {name} -> {folder}");
        }
        Ok(())
    }

    fn on_complete(&self, files: usize, folders: usize, bytes: FileSize) -> Result<()> {
        if self.summary {
            println!("Copied {files} files into {folders} folders ({bytes:#}).");
        }
        Ok(())
    }
}
