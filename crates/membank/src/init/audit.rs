use std::path::Path;

use log::debug;

use super::StepOutcome;
use crate::config::{
  BACKUPS_DIR, CONFIG_FILE, DATA_DIR, LOGS_DIR, MANIFEST_FILE, ProjectPaths, README_FILE,
  SCRIPTS_DIR,
};
use crate::error::InitError;

pub const REQUIRED_FILES: [&str; 3] = [MANIFEST_FILE, CONFIG_FILE, README_FILE];
pub const REQUIRED_DIRS: [&str; 4] = [DATA_DIR, LOGS_DIR, BACKUPS_DIR, SCRIPTS_DIR];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
  File(&'static str),
  Dir(&'static str),
}

impl Requirement {
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Requirement::File(name) | Requirement::Dir(name) => name,
    }
  }

  fn is_met(self, root: &Path) -> bool {
    match self {
      Requirement::File(name) => root.join(name).is_file(),
      Requirement::Dir(name) => root.join(name).is_dir(),
    }
  }
}

/// Audit order: files first, then directories, each in listed order.
pub fn checklist() -> impl Iterator<Item = Requirement> {
  REQUIRED_FILES
    .into_iter()
    .map(Requirement::File)
    .chain(REQUIRED_DIRS.into_iter().map(Requirement::Dir))
}

#[must_use]
pub fn first_missing(root: &Path) -> Option<Requirement> {
  checklist().find(|req| !req.is_met(root))
}

pub fn final_audit(paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
  if let Some(req) = first_missing(paths.root()) {
    debug!("audit: {req:?} missing under {}", paths.root().display());
    return Err(InitError::IncompleteInitialization {
      missing: req.name().to_string(),
    });
  }
  Ok(StepOutcome::Audited)
}
