use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod utils;

use crate::config::AppContext;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "MEMBANK_LOG";

/// membank - Prepare a project directory for the Landing Memory Bank.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Project root to operate on. Defaults to the current directory.
  #[arg(long, global = true, value_name = "PATH")]
  root: Option<PathBuf>,
  /// Emit debug diagnostics for every filesystem action
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Commands {
  /// Run the full initialization sequence (default)
  Init,
  /// Check that an initialized project has all required files and directories
  Audit,
  /// Print the built-in default configuration
  Defaults,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  let cli = parse();
  init_logger(cli.verbose);

  match cli.command.unwrap_or(Commands::Init) {
    Commands::Init => commands::init::run(&context(cli.root)?),
    Commands::Audit => commands::audit::run(&context(cli.root)?),
    Commands::Defaults => commands::defaults::run(),
  }
}

fn context(root: Option<PathBuf>) -> Result<AppContext> {
  let root = resolve_root(root)?;
  log::debug!("project root: {}", root.display());
  Ok(AppContext::new(root))
}

fn init_logger(verbose: bool) {
  let default_filter = if verbose { "debug" } else { "warn" };
  let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
    .format_timestamp_secs()
    .try_init();
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
  match root {
    Some(path) => std::path::absolute(&path)
      .with_context(|| format!("failed to resolve project root {}", path.display())),
    None => std::env::current_dir().context("failed to read the current directory"),
  }
}
