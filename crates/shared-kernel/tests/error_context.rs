// crates/shared-kernel/tests/error_context.rs
use std::io;

use batch_files_shared_kernel::{BatchFilesError, ErrorContext};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(BatchFilesError::from)
        .context("creating destination root")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("creating destination root"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy() {
    let ok: batch_files_shared_kernel::Result<u32> =
        Ok::<u32, io::Error>(7).map_err(BatchFilesError::from).with_context(|| {
            panic!("must not be evaluated on Ok");
        });
    assert_eq!(ok.unwrap(), 7);
}
