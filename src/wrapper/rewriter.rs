use crate::wrapper::pattern::WrapperPatterns;
use regex::Captures;

/// Replacement for a matched opening tag.
pub const FRAGMENT_OPEN: &str = "<>";

/// Replacement for a matched closing tag.
pub const FRAGMENT_CLOSE: &str = "</>";

/// Result of rewriting one file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
	/// The transformed text.
	pub content: String,

	/// Number of opening tags replaced.
	pub opened: usize,

	/// Number of closing tags replaced.
	pub closed: usize,
}

impl Rewrite {
	/// Whether any tag was replaced.
	pub fn changed(&self) -> bool {
		self.opened > 0 || self.closed > 0
	}
}

/// Replace every wrapper opening tag with `<>`, then every closing tag with `</>`.
///
/// The closing pass runs over the output of the opening pass. Both passes
/// replace all non-overlapping matches in the whole text, and the tokens are
/// inserted as-is (no `$` group expansion).
pub fn rewrite(content: &str, patterns: &WrapperPatterns) -> Rewrite {
	let mut opened = 0;
	let content = patterns.opening.replace_all(content, |_: &Captures| {
		opened += 1;
		FRAGMENT_OPEN
	});

	let mut closed = 0;
	let content = patterns
		.closing
		.replace_all(&content, |_: &Captures| {
			closed += 1;
			FRAGMENT_CLOSE
		})
		.into_owned();

	Rewrite {
		content,
		opened,
		closed,
	}
}
