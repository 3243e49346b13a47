use std::io::{self, Write};

use anyhow::Result;

use crate::config::ProjectConfig;

/// Print the configuration written when no `config.example.json` exists.
pub fn run() -> Result<()> {
  let doc = ProjectConfig::default().to_document()?;
  let mut stdout = io::stdout().lock();
  write!(stdout, "{doc}")?;
  Ok(())
}
