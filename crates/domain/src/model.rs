use std::fmt;

use batch_files_shared_kernel::{FileName, FilePath, FileSize};
use serde::{Deserialize, Serialize};

/// A qualifying source file: full path plus the metadata carried into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: FilePath,
    pub name: FileName,
    pub size: FileSize,
}

/// A contiguous run of entries assigned to one destination folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// 1-based, strictly increasing in processing order.
    pub index: usize,
    pub entries: Vec<FileEntry>,
}

impl Group {
    pub fn folder_name(&self) -> FolderName {
        FolderName::new(self.index)
    }
}

/// Name of a numbered destination subdirectory (`folder_1`, `folder_2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderName(String);

impl FolderName {
    pub fn new(index: usize) -> Self {
        Self(format!("folder_{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_names_are_one_based() {
        assert_eq!(FolderName::new(1).as_str(), "folder_1");
        assert_eq!(FolderName::new(12).as_str(), "folder_12");
    }

    #[test]
    fn group_derives_its_folder_from_the_index() {
        let group = Group { index: 3, entries: vec![] };
        assert_eq!(group.folder_name().as_str(), "folder_3");
    }
}
