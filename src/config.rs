use std::path::PathBuf;

use anyhow::Result;
use batch_files_domain::config::{BatchConfig, ExtensionFilter};
use batch_files_domain::options::{FailurePolicy, Ordering};

use crate::cli::{Args, SummaryFormat};

/// Resolved CLI configuration: the domain plan plus presentation options.
#[derive(Debug, Clone)]
pub struct Config {
    pub batch: BatchConfig,
    pub format: SummaryFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Config {
    /// Validate once at startup, before any filesystem mutation.
    pub fn from_args(args: Args) -> Result<Self> {
        let extension = ExtensionFilter::new(&args.ext)?;
        let ordering = if args.unsorted { Ordering::Unsorted } else { Ordering::ByName };
        let failure_policy =
            if args.keep_going { FailurePolicy::KeepGoing } else { FailurePolicy::Strict };

        let batch = BatchConfig::new(
            args.source,
            args.dest,
            args.group_size,
            extension,
            ordering,
            failure_policy,
        )?;

        Ok(Self { batch, format: args.format, output: args.output, quiet: args.quiet })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from([&["batch_files"], argv].concat()).expect("parse args")
    }

    #[test]
    fn defaults_sort_by_name_and_abort_on_error() {
        let config = Config::from_args(parse(&["in", "out"])).expect("build config");
        assert_eq!(config.batch.group_size, 4);
        assert_eq!(config.batch.extension.as_str(), ".pdf");
        assert_eq!(config.batch.ordering, Ordering::ByName);
        assert_eq!(config.batch.failure_policy, FailurePolicy::Strict);
    }

    #[test]
    fn flags_map_onto_domain_options() {
        let config = Config::from_args(parse(&[
            "in", "out", "-n", "7", "--ext", "txt", "--unsorted", "--keep-going",
        ]))
        .expect("build config");
        assert_eq!(config.batch.group_size, 7);
        assert_eq!(config.batch.extension.as_str(), ".txt");
        assert_eq!(config.batch.ordering, Ordering::Unsorted);
        assert_eq!(config.batch.failure_policy, FailurePolicy::KeepGoing);
    }

    #[test]
    fn zero_group_size_is_a_configuration_error() {
        let err = Config::from_args(parse(&["in", "out", "-n", "0"])).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }
}
