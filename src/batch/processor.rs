use crate::error::{DewrapError, Result};
use crate::wrapper::{WrapperPatterns, rewrite};
use std::io::Write;
use std::path::Path;

/// Line printed once every target has been handled.
pub const COMPLETION_MESSAGE: &str = "All remaining wrappers fixed!";

/// Totals for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
	/// Files read and written back.
	pub fixed: usize,

	/// Listed paths that did not exist.
	pub skipped: usize,

	/// Opening tags replaced across all files.
	pub opened: usize,

	/// Closing tags replaced across all files.
	pub closed: usize,
}

/// Rewrite every existing path in `paths`, in order, reporting progress to `out`.
///
/// Missing paths are skipped without output. The first read or write failure
/// stops the batch: files already written stay written and later paths are
/// not attempted.
pub fn process<W: Write>(
	paths: &[String],
	patterns: &WrapperPatterns,
	out: &mut W,
) -> Result<BatchSummary> {
	let mut summary = BatchSummary::default();

	for path_str in paths {
		let path = Path::new(path_str);

		if !path.exists() {
			tracing::debug!(path = %path_str, "skipping missing target");
			summary.skipped += 1;
			continue;
		}

		writeln!(out, "Fixing {path_str}...").map_err(DewrapError::Report)?;

		let content = std::fs::read_to_string(path).map_err(|source| DewrapError::ReadFailed {
			path: path.to_path_buf(),
			source,
		})?;

		let result = rewrite(&content, patterns);

		std::fs::write(path, &result.content).map_err(|source| DewrapError::WriteFailed {
			path: path.to_path_buf(),
			source,
		})?;

		tracing::info!(
			path = %path_str,
			element = %patterns.element,
			opened = result.opened,
			closed = result.closed,
			changed = result.changed(),
			"rewrote target"
		);

		writeln!(out, "Fixed {path_str}").map_err(DewrapError::Report)?;

		summary.fixed += 1;
		summary.opened += result.opened;
		summary.closed += result.closed;
	}

	writeln!(out, "{COMPLETION_MESSAGE}").map_err(DewrapError::Report)?;

	Ok(summary)
}
