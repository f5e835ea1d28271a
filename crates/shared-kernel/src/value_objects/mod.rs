pub mod file_info;

pub use file_info::{FileName, FilePath, FileSize};
