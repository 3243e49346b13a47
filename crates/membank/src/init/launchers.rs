use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::StepOutcome;
use crate::config::ProjectPaths;
use crate::error::InitError;

const START_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/start.js"));
const DEV_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/dev.js"));

/// Entry points handed to the downstream application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launcher {
  /// Plain `activate()`.
  Production,
  /// `activate()` with `development` and `watchMode` enabled.
  Development,
}

impl Launcher {
  pub const ALL: [Launcher; 2] = [Launcher::Production, Launcher::Development];

  #[must_use]
  pub fn file_name(self) -> &'static str {
    match self {
      Launcher::Production => "start.js",
      Launcher::Development => "dev.js",
    }
  }

  #[must_use]
  pub fn body(self) -> &'static str {
    match self {
      Launcher::Production => START_TEMPLATE,
      Launcher::Development => DEV_TEMPLATE,
    }
  }
}

/// Regenerate both launchers under `scripts/` and mark them executable.
///
/// Existing launchers are overwritten on every run.
pub fn create_launcher_scripts(paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
  let dir = paths.scripts_dir();
  fs::create_dir_all(&dir).map_err(|source| InitError::ScriptWrite {
    path: dir.clone(),
    source,
  })?;

  let mut scripts = Vec::with_capacity(Launcher::ALL.len());
  for launcher in Launcher::ALL {
    let path = dir.join(launcher.file_name());
    fs::write(&path, launcher.body()).map_err(|source| InitError::ScriptWrite {
      path: path.clone(),
      source,
    })?;
    debug!("wrote {}", path.display());
    scripts.push(path);
  }

  for path in &scripts {
    make_executable(path)?;
  }
  Ok(StepOutcome::LaunchersWritten { scripts })
}

fn make_executable(path: &Path) -> Result<(), InitError> {
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt as _;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
      InitError::ScriptWrite {
        path: PathBuf::from(path),
        source,
      }
    })?;
  }
  #[cfg(not(unix))]
  let _ = path;
  Ok(())
}
