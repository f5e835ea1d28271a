use std::path::PathBuf;

use batch_files_shared_kernel::{DomainError, DomainResult, FileName};

use crate::options::{FailurePolicy, Ordering};

/// Case-sensitive file name suffix filter, including the leading dot.
///
/// Matching is a byte-exact suffix comparison: `a.pdf` matches `.pdf`,
/// `a.PDF` does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter(String);

impl ExtensionFilter {
    pub const DEFAULT: &'static str = ".pdf";

    /// Normalize and validate a user-supplied suffix. A missing leading dot
    /// is supplied; an empty or dot-only value is rejected.
    pub fn new(suffix: &str) -> DomainResult<Self> {
        let trimmed = suffix.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Err(DomainError::InvalidExtension {
                value: suffix.to_string(),
                details: "suffix must contain at least one character after the dot".to_string(),
            });
        }
        let normalized = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{trimmed}")
        };
        Ok(Self(normalized))
    }

    pub fn matches(&self, name: &FileName) -> bool {
        name.has_suffix(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain representation of one resolved batch copy run.
///
/// Constructed once at startup; every invariant here is checked before the
/// first filesystem mutation.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub dest_root: PathBuf,
    pub group_size: usize,
    pub extension: ExtensionFilter,
    pub ordering: Ordering,
    pub failure_policy: FailurePolicy,
}

impl BatchConfig {
    pub fn new(
        source_dir: PathBuf,
        dest_root: PathBuf,
        group_size: usize,
        extension: ExtensionFilter,
        ordering: Ordering,
        failure_policy: FailurePolicy,
    ) -> DomainResult<Self> {
        if group_size == 0 {
            return Err(DomainError::InvalidGroupSize { value: group_size });
        }
        if source_dir.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "source directory must not be empty".to_string(),
            });
        }
        if dest_root.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "destination root must not be empty".to_string(),
            });
        }

        Ok(Self { source_dir, dest_root, group_size, extension, ordering, failure_policy })
    }
}
