use anyhow::{Context, Result};

use crate::config::AppContext;
use crate::init::{self, ConsoleReporter, Step};

/// Run only the final audit against an already initialized project.
pub fn run(ctx: &AppContext) -> Result<()> {
  let mut reporter = ConsoleReporter::new();
  init::execute(&ctx.paths, &[Step::FinalAudit], &mut reporter).context("audit failed")?;
  Ok(())
}
