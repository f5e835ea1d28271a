use anyhow::{Context, Result};
use batch_files_infra::persistence::ReportWriter;
use batch_files_usecase::RunReport;

use crate::cli::SummaryFormat;
use crate::config::Config;

/// Render the run report: failure warnings, JSON body, optional report file.
///
/// The plain-mode success line is printed by the progress sink as part of the
/// run itself; this stage only adds what the sink does not know about.
pub fn emit(report: &RunReport, config: &Config) -> Result<()> {
    for failure in &report.failed {
        eprintln!("[warn] {} -> {}: {}", failure.name, failure.folder, failure.error);
    }

    if matches!(config.format, SummaryFormat::Json) {
        let body = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{body}");
    }

    if let Some(path) = &config.output {
        let data = serde_json::to_vec_pretty(report).context("failed to serialize report")?;
        ReportWriter::write_atomic(path, &data)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(())
}
