//! Dewrap - CLI tool for replacing a layout wrapper element with JSX fragments.
//!
//! This library provides the core functionality for dewrap, including:
//! - Configuration of the target files and wrapper element
//! - Opening/closing tag pattern compilation and rewriting
//! - In-place batch processing with progress reporting
//!
//! # Example
//!
//! ```no_run
//! use dewrap::batch::process;
//! use dewrap::config::Config;
//! use dewrap::wrapper::WrapperPatterns;
//!
//! let config = Config::default();
//! let patterns = WrapperPatterns::new(&config.element).unwrap();
//! let summary = process(&config.targets, &patterns, &mut std::io::stdout()).unwrap();
//! println!("{} files rewritten", summary.fixed);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod wrapper;

pub use error::{DewrapError, Result};
