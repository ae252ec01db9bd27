use crate::config::types::{DEFAULT_ELEMENT, DEFAULT_TARGETS};

/// File name written by `dewrap --init`.
pub const CONFIG_FILE_NAME: &str = ".dewrap.toml";

/// Generate a template `.dewrap.toml` listing the built-in defaults.
pub fn generate_init_template() -> String {
	let mut out = String::new();
	out.push_str("# dewrap configuration\n");
	out.push_str("#\n");
	out.push_str("# Opening tags `<ELEMENT ...>` become `<>` and closing tags\n");
	out.push_str("# `</ELEMENT>` become `</>`. Files are rewritten in place.\n\n");

	out.push_str(&format!("element = \"{DEFAULT_ELEMENT}\"\n\n"));

	out.push_str("# Paths relative to the directory dewrap runs in.\n");
	out.push_str("# Missing files are skipped.\n");
	out.push_str("targets = [\n");
	for target in DEFAULT_TARGETS {
		out.push_str(&format!("    \"{target}\",\n"));
	}
	out.push_str("]\n");
	out
}
