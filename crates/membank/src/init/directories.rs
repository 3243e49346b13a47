use std::fs;

use log::debug;

use super::StepOutcome;
use crate::config::ProjectPaths;
use crate::error::InitError;

/// Ensure every directory of the fixed layout exists.
///
/// Existing directories are left alone. A non-directory occupying one of the
/// paths is an error.
pub fn create_directory_structure(paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
  let mut created = Vec::new();
  for (name, dir) in paths.directories() {
    if dir.is_dir() {
      debug!("directory {} already exists", dir.display());
      continue;
    }
    fs::create_dir_all(&dir).map_err(|source| InitError::DirectoryCreation {
      path: dir.clone(),
      source,
    })?;
    debug!("created {}", dir.display());
    created.push(name);
  }
  Ok(StepOutcome::DirectoriesReady { created })
}
