use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde::{Deserialize, Serialize, Serializer};

use super::StepOutcome;
use crate::config::ProjectPaths;
use crate::error::InitError;

pub const SCHEMA_VERSION: &str = "1.0.0";
pub const TABLES: [&str; 4] = ["knowledge", "projects", "modes", "rules"];
pub const STATUS_INITIALIZED: &str = "initialized";

/// Placeholder declaring that the storage layer has been initialized.
/// It holds no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMarker {
  pub version: String,
  #[serde(serialize_with = "serialize_millis")]
  pub created: DateTime<Utc>,
  pub tables: Vec<String>,
  pub status: String,
}

impl StateMarker {
  #[must_use]
  pub fn new(created: DateTime<Utc>) -> Self {
    Self {
      version: SCHEMA_VERSION.to_string(),
      created,
      tables: TABLES.iter().map(ToString::to_string).collect(),
      status: STATUS_INITIALIZED.to_string(),
    }
  }
}

fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
  s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Refresh the state marker and the data sentinel with the current time.
pub fn initialize_state_marker(paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
  write_state_marker(paths, Utc::now())
}

/// Always rewrites both files; this step is not existence-gated.
pub fn write_state_marker(
  paths: &ProjectPaths,
  created: DateTime<Utc>,
) -> Result<StepOutcome, InitError> {
  let marker_path = paths.state_marker();
  let mut doc = serde_json::to_string_pretty(&StateMarker::new(created))
    .map_err(io::Error::from)
    .map_err(state_err(marker_path.clone()))?;
  doc.push('\n');
  fs::write(&marker_path, doc).map_err(state_err(marker_path.clone()))?;
  debug!("wrote {}", marker_path.display());

  let sentinel = paths.sentinel();
  fs::write(&sentinel, b"").map_err(state_err(sentinel.clone()))?;
  debug!("wrote {}", sentinel.display());

  Ok(StepOutcome::StateMarked { created })
}

fn state_err(path: PathBuf) -> impl FnOnce(io::Error) -> InitError {
  move |source| InitError::StateWrite { path, source }
}
