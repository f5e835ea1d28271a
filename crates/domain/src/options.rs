/// Orderings applied to the qualifying file list before partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    /// Lexicographic by file name. Grouping is reproducible across platforms.
    #[default]
    ByName,
    /// Whatever order the directory listing returned.
    Unsorted,
}

/// Failure policies for the copy phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole run on the first error.
    #[default]
    Strict,
    /// Capture per-file errors and keep copying the remaining files.
    KeepGoing,
}
