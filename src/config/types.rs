use crate::error::DewrapError;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Wrapper element removed when no other name is configured.
pub const DEFAULT_ELEMENT: &str = "DocumentDashboardLayout";

/// Pages still wrapped in the dashboard layout, in processing order.
pub const DEFAULT_TARGETS: &[&str] = &[
	"app/dashboard/weather/page.tsx",
	"app/dashboard/admin/calendar/page.tsx",
	"app/dashboard/admin/emergency-protocols/page.tsx",
	"app/dashboard/admin/rss/page.tsx",
	"app/dashboard/admin/announcements/page.tsx",
	"app/dashboard/admin/weather/page.tsx",
	"app/dashboard/admin/cameras/page.tsx",
	"app/dashboard/admin/contacts/page.tsx",
	"app/dashboard/admin/radio/page.tsx",
];

static ELEMENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z][A-Za-z0-9_.:-]*$").expect("element name pattern is valid")
});

/// Top-level configuration, from a `.dewrap.toml` file or the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Name of the wrapper element to replace with a fragment.
	#[serde(default = "default_element")]
	pub element: String,

	/// Files to rewrite, relative to the current directory.
	/// Processed in order; missing files are skipped.
	#[serde(default = "default_targets")]
	pub targets: Vec<String>,
}

fn default_element() -> String {
	DEFAULT_ELEMENT.to_string()
}

fn default_targets() -> Vec<String> {
	DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
	fn default() -> Self {
		Config {
			element: default_element(),
			targets: default_targets(),
		}
	}
}

impl Config {
	/// Validate that the element name is a plain tag name.
	pub fn validate(&self) -> Result<(), DewrapError> {
		if !ELEMENT_NAME.is_match(&self.element) {
			return Err(DewrapError::InvalidElement {
				element: self.element.clone(),
			});
		}
		Ok(())
	}
}
