use batch_files_domain::config::BatchConfig;
use batch_files_domain::model::{FileEntry, Group};
use batch_files_domain::options::FailurePolicy;
use batch_files_domain::partition::partition;
use batch_files_domain::selection::select;
use batch_files_ports::filesystem::{DestinationWriter, SourceFileDto, SourceLister};
use batch_files_ports::progress::ProgressSink;
use batch_files_shared_kernel::{ApplicationError, FileName, FilePath, FileSize, Result};

use crate::dto::{CopiedFile, FailedFile, RunReport};

/// Orchestrates one batch copy run: enumerate, partition, provision, copy.
///
/// The run is strictly sequential; each filesystem operation completes
/// before the next begins.
pub struct BatchCopy<'a> {
    lister: &'a dyn SourceLister,
    writer: &'a dyn DestinationWriter,
    progress: &'a dyn ProgressSink,
}

impl<'a> BatchCopy<'a> {
    pub fn new(
        lister: &'a dyn SourceLister,
        writer: &'a dyn DestinationWriter,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self { lister, writer, progress }
    }

    /// Run the batch copy described by `config`.
    ///
    /// The destination root is provisioned before the source is listed, so an
    /// empty source still leaves the root behind. In strict mode the first
    /// copy error aborts the run; in keep-going mode per-file failures are
    /// captured in the report and the remaining files still run.
    pub fn run(&self, config: &BatchConfig) -> Result<RunReport> {
        self.writer.ensure_dir(&config.dest_root)?;

        let entries = self.enumerate(config)?;
        self.progress.on_found(entries.len())?;

        let groups = partition(entries, config.group_size);
        let mut report = RunReport { groups: groups.len(), ..RunReport::default() };

        for group in &groups {
            self.distribute(config, group, &mut report)?;
        }

        self.progress.on_complete(report.copied.len(), report.groups, report.bytes)?;
        Ok(report)
    }

    fn enumerate(&self, config: &BatchConfig) -> Result<Vec<FileEntry>> {
        let dtos = self.lister.collect(&config.source_dir).map_err(|source| {
            ApplicationError::SourceCollectionFailed {
                reason: format!("listing {}", config.source_dir.display()),
                source: Some(Box::new(source)),
            }
        })?;
        let raw = dtos.into_iter().map(dto_to_entry).collect();
        Ok(select(raw, &config.extension, config.ordering))
    }

    fn distribute(&self, config: &BatchConfig, group: &Group, report: &mut RunReport) -> Result<()> {
        let folder = group.folder_name();
        let dir = config.dest_root.join(folder.as_str());
        // Folder provisioning failures are fatal in both policies; only the
        // per-file copy participates in keep-going.
        self.writer.ensure_dir(&dir)?;

        for entry in &group.entries {
            let dest = dir.join(entry.name.as_str());
            match self.writer.copy_file(entry.path.as_path(), &dest) {
                Ok(bytes) => {
                    let bytes = FileSize::new(bytes);
                    self.progress.on_copied(entry.name.as_str(), folder.as_str())?;
                    report.bytes = report.bytes.saturating_add(bytes);
                    report.copied.push(CopiedFile {
                        name: entry.name.clone(),
                        folder: folder.clone(),
                        bytes,
                    });
                }
                Err(source) if config.failure_policy == FailurePolicy::KeepGoing => {
                    report.failed.push(FailedFile {
                        name: entry.name.clone(),
                        folder: folder.clone(),
                        error: source.to_string(),
                    });
                }
                Err(source) => {
                    return Err(ApplicationError::GroupDistributionFailed {
                        group: group.index,
                        reason: format!("copying {}", entry.name),
                        source: Some(Box::new(source)),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

fn dto_to_entry(dto: SourceFileDto) -> FileEntry {
    FileEntry {
        path: FilePath::from(dto.path),
        name: FileName::new(dto.name),
        size: FileSize::new(dto.size),
    }
}
