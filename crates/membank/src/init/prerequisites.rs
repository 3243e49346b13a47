use std::fs;

use log::debug;
use serde_json::Value;

use super::StepOutcome;
use crate::config::ProjectPaths;
use crate::error::InitError;

/// Number of entries in the manifest's `dependencies` mapping.
///
/// A manifest that is not a JSON object, or whose `dependencies` is not an
/// object, declares none.
fn dependency_count(manifest: &Value) -> usize {
  manifest
    .as_object()
    .and_then(|fields| fields.get("dependencies"))
    .and_then(Value::as_object)
    .map_or(0, serde_json::Map::len)
}

/// Verify the manifest exists and declares at least one dependency.
///
/// Read-only: nothing under the project root is touched.
pub fn check_prerequisites(paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
  let path = paths.manifest();
  if !path.is_file() {
    return Err(InitError::MissingManifest { path });
  }

  let raw = fs::read_to_string(&path).map_err(|err| InitError::ManifestUnreadable {
    path: path.clone(),
    reason: err.to_string(),
  })?;
  let manifest: Value =
    serde_json::from_str(&raw).map_err(|err| InitError::ManifestUnreadable {
      path: path.clone(),
      reason: err.to_string(),
    })?;

  let dependencies = dependency_count(&manifest);
  if dependencies == 0 {
    return Err(InitError::NoDependenciesDeclared { path });
  }
  debug!("{} declares {dependencies} dependencies", path.display());
  Ok(StepOutcome::Checked { dependencies })
}
