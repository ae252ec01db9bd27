use std::path::PathBuf;

/// Everything that can stop a dewrap run.
///
/// Config and element errors happen before any target is touched. Target
/// read/write errors abort the batch at the file they name, and report errors
/// abort it wherever stdout stopped accepting output. Files rewritten earlier
/// in the batch keep their new contents.
#[derive(Debug, thiserror::Error)]
pub enum DewrapError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid wrapper element name: {element:?}")]
	InvalidElement { element: String },

	#[error("Invalid regex pattern for wrapper: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read target file: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write target file: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write progress report")]
	Report(#[source] std::io::Error),
}

/// Result type alias using DewrapError.
pub type Result<T> = std::result::Result<T, DewrapError>;
