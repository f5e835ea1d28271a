use crate::model::{FileEntry, Group};

/// Split `entries` into consecutive groups of at most `group_size` entries.
///
/// Groups are produced in list order, non-overlapping, covering the whole
/// list; only the last group may hold fewer than `group_size` entries.
/// `group_size` is validated by `BatchConfig`; zero here is a caller bug.
pub fn partition(entries: Vec<FileEntry>, group_size: usize) -> Vec<Group> {
    debug_assert!(group_size > 0);

    let mut groups: Vec<Group> = Vec::with_capacity(entries.len().div_ceil(group_size));
    let mut current: Vec<FileEntry> = Vec::with_capacity(group_size);

    for entry in entries {
        current.push(entry);
        if current.len() == group_size {
            let entries = std::mem::replace(&mut current, Vec::with_capacity(group_size));
            groups.push(Group { index: groups.len() + 1, entries });
        }
    }

    if !current.is_empty() {
        groups.push(Group { index: groups.len() + 1, entries: current });
    }

    groups
}
