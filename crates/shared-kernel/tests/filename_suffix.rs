// crates/shared-kernel/tests/filename_suffix.rs
use batch_files_shared_kernel::FileName;

#[test]
fn suffix_match_is_case_sensitive() {
    let name = FileName::new("invoice.pdf".to_string());
    assert!(name.has_suffix(".pdf"));
    assert!(!name.has_suffix(".PDF"));
}

#[test]
fn suffix_must_terminate_the_name() {
    let name = FileName::new("archive.pdf.bak".to_string());
    assert!(!name.has_suffix(".pdf"));
}
