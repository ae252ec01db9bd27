//! Wrapper element matching and rewriting for dewrap.
//!
//! This module handles:
//! - Compiling the opening/closing tag patterns for an element name
//! - Replacing wrapper tags with JSX fragments

pub mod pattern;
pub mod rewriter;

pub use pattern::WrapperPatterns;
pub use rewriter::{FRAGMENT_CLOSE, FRAGMENT_OPEN, Rewrite, rewrite};
