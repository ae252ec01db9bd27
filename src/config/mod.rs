//! Configuration loading and parsing for dewrap.
//!
//! This module handles:
//! - Built-in default targets and element name
//! - TOML config file parsing
//! - Template generation for `--init`

pub mod parser;
pub mod template;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use template::{CONFIG_FILE_NAME, generate_init_template};
pub use types::{Config, DEFAULT_ELEMENT, DEFAULT_TARGETS};
