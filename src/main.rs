use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dewrap::batch::process;
use dewrap::config::{CONFIG_FILE_NAME, Config, generate_init_template, parse_config_file};
use dewrap::wrapper::WrapperPatterns;

#[derive(Parser)]
#[command(name = "dewrap")]
#[command(
	author,
	version,
	about = "CLI tool for unwrapping layout wrapper elements into fragments in place"
)]
struct Cli {
	/// Load target files and element name from a TOML file
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Wrapper element to replace (defaults to DocumentDashboardLayout)
	#[arg(long, value_name = "NAME")]
	element: Option<String>,

	/// Create a template .dewrap.toml in the current directory
	#[arg(long, conflicts_with_all = ["config", "element", "paths"])]
	init: bool,

	/// Overwrite existing .dewrap.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,

	/// Files to rewrite instead of the configured targets
	paths: Vec<String>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	let config = resolve_config(&cli)?;
	handle_rewrite(&config)
}

/// Install a stderr subscriber when `-v` or `RUST_LOG` asks for one.
///
/// Stdout carries only the progress lines, so logging never goes there.
fn init_tracing(verbose: u8) {
	let base_filter = match std::env::var("RUST_LOG") {
		Ok(filter) => filter,
		Err(_) => match verbose {
			0 => return,
			1 => "warn,dewrap=info".to_string(),
			2 => "warn,dewrap=debug".to_string(),
			_ => "debug,dewrap=trace".to_string(),
		},
	};

	let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_target(verbose >= 2)
				.with_writer(std::io::stderr)
				.compact(),
		)
		.init();
}

/// Built-in defaults, then the config file, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
	let mut config = match cli.config {
		Some(ref path) => parse_config_file(path)
			.with_context(|| format!("Failed to load configuration from {}", path.display()))?,
		None => Config::default(),
	};

	if let Some(ref element) = cli.element {
		config.element = element.clone();
	}

	if !cli.paths.is_empty() {
		config.targets = cli.paths.clone();
	}

	config.validate().context("Invalid configuration")?;
	Ok(config)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = Path::new(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rewrite(config: &Config) -> Result<ExitCode> {
	let patterns = WrapperPatterns::new(&config.element)
		.with_context(|| format!("Failed to build patterns for <{}>", config.element))?;

	let stdout = std::io::stdout();
	let summary = process(&config.targets, &patterns, &mut stdout.lock())
		.context("Rewrite aborted")?;

	tracing::info!(
		fixed = summary.fixed,
		skipped = summary.skipped,
		opened = summary.opened,
		closed = summary.closed,
		"batch complete"
	);

	Ok(ExitCode::SUCCESS)
}
