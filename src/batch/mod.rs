//! Batch rewriting for dewrap.
//!
//! This module handles:
//! - Walking the target list in order
//! - Reading, rewriting and writing back each file
//! - Progress reporting on stdout

pub mod processor;

pub use processor::{BatchSummary, COMPLETION_MESSAGE, process};
