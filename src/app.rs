use anyhow::{Context, Result};
use batch_files_infra::filesystem::{DirSourceLister, FsDestinationWriter};
use batch_files_infra::progress::ConsoleProgress;
use batch_files_usecase::BatchCopy;

use crate::cli::{Args, SummaryFormat};
use crate::config::Config;
use crate::presentation;

/// Wire the adapters, run the batch copy, and emit the report.
///
/// Returns `Ok(true)` when every file copied, `Ok(false)` when a keep-going
/// run recorded per-file failures.
pub fn run(args: Args) -> Result<bool> {
    let config = Config::from_args(args)?;

    let lister = DirSourceLister::new();
    let writer = FsDestinationWriter::new();
    let progress =
        ConsoleProgress::new(config.quiet, matches!(config.format, SummaryFormat::Plain));

    let usecase = BatchCopy::new(&lister, &writer, &progress);
    let report = usecase.run(&config.batch).context("batch copy failed")?;

    presentation::emit(&report, &config)?;

    Ok(report.is_clean())
}
