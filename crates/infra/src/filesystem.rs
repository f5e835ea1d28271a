// crates/infra/src/filesystem.rs
use std::{fs, io::ErrorKind, path::Path};

use batch_files_ports::filesystem::{DestinationWriter, SourceFileDto, SourceLister};
use batch_files_shared_kernel::{InfraResult, InfrastructureError, Result};

/// Filesystem adapter implementing the `SourceLister` port with a one-level,
/// non-recursive snapshot of the source directory.
#[derive(Debug, Default)]
pub struct DirSourceLister;

impl DirSourceLister {
    pub fn new() -> Self {
        Self
    }
}

impl SourceLister for DirSourceLister {
    fn collect(&self, source_dir: &Path) -> Result<Vec<SourceFileDto>> {
        collect_entries(source_dir).map_err(Into::into)
    }
}

// 列挙順はプラットフォーム依存のまま返す。正規化は上位レイヤの責務。
fn collect_entries(dir: &Path) -> InfraResult<Vec<SourceFileDto>> {
    let metadata = fs::metadata(dir).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InfrastructureError::SourceNotFound { path: dir.to_path_buf() },
        _ => InfrastructureError::DirectoryList { path: dir.to_path_buf(), source },
    })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::NotADirectory { path: dir.to_path_buf() });
    }

    let read_dir = fs::read_dir(dir)
        .map_err(|source| InfrastructureError::DirectoryList { path: dir.to_path_buf(), source })?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|source| InfrastructureError::DirectoryList {
            path: dir.to_path_buf(),
            source,
        })?;
        if let Some(dto) = build_dto(&item)? {
            entries.push(dto);
        }
    }

    Ok(entries)
}

// Only regular files become entries, so a directory named `a.pdf` can never
// qualify downstream. Symlinks are not followed.
fn build_dto(item: &fs::DirEntry) -> InfraResult<Option<SourceFileDto>> {
    let file_type = item
        .file_type()
        .map_err(|source| InfrastructureError::Metadata { path: item.path(), source })?;
    if !file_type.is_file() {
        return Ok(None);
    }

    let name = match item.file_name().into_string() {
        Ok(name) => name,
        // Non UTF-8 names cannot match a UTF-8 suffix; skip them.
        Err(_) => return Ok(None),
    };

    let size = item
        .metadata()
        .map_err(|source| InfrastructureError::Metadata { path: item.path(), source })?
        .len();

    Ok(Some(SourceFileDto { path: item.path(), name, size }))
}

/// Adapter implementing the `DestinationWriter` port on top of `std::fs`.
#[derive(Debug, Default)]
pub struct FsDestinationWriter;

impl FsDestinationWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DestinationWriter for FsDestinationWriter {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| InfrastructureError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        let bytes = fs::copy(from, to).map_err(|source| InfrastructureError::FileCopy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn sorted_names(entries: &[SourceFileDto]) -> Vec<String> {
        let mut names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn lists_regular_files_but_not_directories() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("a.pdf"), b"x").expect("write a.pdf");
        std::fs::write(dir.path().join("b.PDF"), b"x").expect("write b.PDF");
        std::fs::write(dir.path().join("c.txt"), b"x").expect("write c.txt");
        std::fs::create_dir(dir.path().join("d.pdf")).expect("create d.pdf dir");

        let entries = collect_entries(dir.path()).expect("collect");
        // Name-based qualification happens upstream; the lister reports every
        // regular file and nothing else.
        assert_eq!(sorted_names(&entries), ["a.pdf", "b.PDF", "c.txt"]);
    }

    #[test]
    fn listing_does_not_descend_into_subdirectories() {
        let dir = tempdir().expect("temp dir");
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).expect("create nested");
        std::fs::write(sub.join("inner.pdf"), b"x").expect("write inner.pdf");
        std::fs::write(dir.path().join("top.pdf"), b"x").expect("write top.pdf");

        let entries = collect_entries(dir.path()).expect("collect");
        assert_eq!(sorted_names(&entries), ["top.pdf"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_treated_as_files() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("real.pdf");
        std::fs::write(&target, b"x").expect("write real.pdf");
        symlink(&target, dir.path().join("link.pdf")).expect("create symlink");

        let entries = collect_entries(dir.path()).expect("collect");
        assert_eq!(sorted_names(&entries), ["real.pdf"]);
    }

    #[test]
    fn missing_source_maps_to_source_not_found() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("gone");

        let err = collect_entries(&missing).unwrap_err();
        assert!(matches!(err, InfrastructureError::SourceNotFound { path } if path == missing));
    }

    #[test]
    fn file_as_source_maps_to_not_a_directory() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("plain.pdf");
        std::fs::write(&file, b"x").expect("write file");

        let err = collect_entries(&file).unwrap_err();
        assert!(matches!(err, InfrastructureError::NotADirectory { path } if path == file));
    }

    #[test]
    fn entry_sizes_come_from_metadata() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("a.pdf"), b"hello").expect("write a.pdf");

        let entries = collect_entries(dir.path()).expect("collect");
        assert_eq!(entries[0].size, 5);
    }

    #[test]
    fn ensure_dir_is_idempotent_and_recursive() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("a/b/c");
        let writer = FsDestinationWriter::new();

        writer.ensure_dir(&target).expect("first create");
        writer.ensure_dir(&target).expect("second create");
        assert!(target.is_dir());
    }

    #[test]
    fn copy_overwrites_and_reports_byte_count() {
        let dir = tempdir().expect("temp dir");
        let from = dir.path().join("src.pdf");
        let to = dir.path().join("dst.pdf");
        std::fs::write(&from, b"fresh content").expect("write source");
        std::fs::write(&to, b"stale").expect("write stale destination");

        let writer = FsDestinationWriter::new();
        let bytes = writer.copy_file(&from, &to).expect("copy");

        assert_eq!(bytes, 13);
        assert_eq!(std::fs::read(&to).expect("read destination"), b"fresh content");
        // Source is untouched.
        assert_eq!(std::fs::read(&from).expect("read source"), b"fresh content");
    }
}
