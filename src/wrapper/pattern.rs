use crate::error::{DewrapError, Result};
use regex::Regex;

/// Compiled opening/closing patterns for one wrapper element.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone)]
pub struct WrapperPatterns {
	/// The element name the patterns were built from.
	pub element: String,

	/// Matches `<NAME` followed by whitespace and everything up to the next `>`.
	pub opening: Regex,

	/// Matches the literal `</NAME>`.
	pub closing: Regex,
}

impl WrapperPatterns {
	/// Compile the pattern pair for `element`.
	pub fn new(element: &str) -> Result<Self> {
		let name = regex::escape(element);

		// `[^>]` stops at the first `>`, even one inside an attribute value.
		let opening = compile_regex(&format!(r"(?s)<{name}\s+[^>]*>"))?;
		let closing = compile_regex(&format!("</{name}>"))?;

		Ok(WrapperPatterns {
			element: element.to_string(),
			opening,
			closing,
		})
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| DewrapError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}
