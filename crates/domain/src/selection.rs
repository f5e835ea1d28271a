use crate::config::ExtensionFilter;
use crate::model::FileEntry;
use crate::options::Ordering;

/// Apply the extension filter and the configured ordering to a raw listing.
///
/// The listing itself has no guaranteed order across platforms; `ByName`
/// normalizes it so that group membership is reproducible.
pub fn select(mut entries: Vec<FileEntry>, filter: &ExtensionFilter, ordering: Ordering) -> Vec<FileEntry> {
    entries.retain(|entry| filter.matches(&entry.name));
    if ordering == Ordering::ByName {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    entries
}
