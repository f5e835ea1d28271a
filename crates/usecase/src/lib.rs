//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the batch copy run:
//!
//! - [`orchestrator`]: enumerate, partition, provision folders, copy
//! - [`dto`]: the run report returned across the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{CopiedFile, FailedFile, RunReport};
pub use orchestrator::BatchCopy;
