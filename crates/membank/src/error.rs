//! Failures that abort an initialization run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::init::Step;

#[derive(Debug, Error)]
pub enum InitError {
  #[error("{} not found. Make sure you are in the project root", .path.display())]
  MissingManifest { path: PathBuf },

  #[error("failed to read manifest {}: {reason}", .path.display())]
  ManifestUnreadable { path: PathBuf, reason: String },

  #[error("no dependencies declared in {}. Run npm install first", .path.display())]
  NoDependenciesDeclared { path: PathBuf },

  #[error("failed to create directory {}: {source}", .path.display())]
  DirectoryCreation {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write configuration {}: {source}", .path.display())]
  ConfigWrite {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write state marker {}: {source}", .path.display())]
  StateWrite {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write launcher script {}: {source}", .path.display())]
  ScriptWrite {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("initialization incomplete: missing {missing}")]
  IncompleteInitialization { missing: String },
}

impl InitError {
  /// The pipeline step that raises this error.
  #[must_use]
  pub fn step(&self) -> Step {
    match self {
      Self::MissingManifest { .. }
      | Self::ManifestUnreadable { .. }
      | Self::NoDependenciesDeclared { .. } => Step::CheckPrerequisites,
      Self::DirectoryCreation { .. } => Step::CreateDirectories,
      Self::ConfigWrite { .. } => Step::SetupConfiguration,
      Self::StateWrite { .. } => Step::InitializeStateMarker,
      Self::ScriptWrite { .. } => Step::CreateLauncherScripts,
      Self::IncompleteInitialization { .. } => Step::FinalAudit,
    }
  }
}
