use anyhow::{Context, Result};

use crate::config::{AppContext, README_FILE};
use crate::init::{self, ConsoleReporter};
use crate::utils::log::t;
use crate::{log_info, log_success};

pub fn run(ctx: &AppContext) -> Result<()> {
  let root = ctx.paths.root();
  log_info!("");
  log_info!("Initializing Landing Memory Bank in {}", t::path(root.display()));
  log_info!("");

  let mut reporter = ConsoleReporter::new();
  init::initialize(&ctx.paths, &mut reporter).context("initialization failed")?;

  log_info!("");
  log_success!("Landing Memory Bank initialized successfully");
  log_info!("To start it run {}", t::cmd("npm start"));
  log_info!("Documentation: {}", t::path(README_FILE));
  log_info!("");
  Ok(())
}
