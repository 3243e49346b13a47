use std::fmt;
use std::fs;
use std::io;

use log::debug;

use super::StepOutcome;
use crate::config::{CONFIG_TEMPLATE_FILE, ProjectConfig, ProjectPaths};
use crate::error::InitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigAction {
  /// `config.json` was already present and left untouched.
  AlreadyExists,
  CopiedFromTemplate,
  WroteDefault,
}

impl fmt::Display for ConfigAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigAction::AlreadyExists => write!(f, "Configuration already exists"),
      ConfigAction::CopiedFromTemplate => {
        write!(f, "Configuration copied from {CONFIG_TEMPLATE_FILE}")
      }
      ConfigAction::WroteDefault => write!(f, "Default configuration created"),
    }
  }
}

/// Materialize `config.json` unless one already exists.
///
/// The template is copied byte for byte when present; otherwise the built-in
/// [`ProjectConfig`] default is written.
pub fn setup_configuration(paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
  let config = paths.config();
  if config.exists() {
    debug!("keeping existing {}", config.display());
    return Ok(StepOutcome::Configured(ConfigAction::AlreadyExists));
  }

  let template = paths.config_template();
  let action = if template.is_file() {
    fs::copy(&template, &config).map_err(|source| InitError::ConfigWrite {
      path: config.clone(),
      source,
    })?;
    debug!("copied {} to {}", template.display(), config.display());
    ConfigAction::CopiedFromTemplate
  } else {
    let doc = ProjectConfig::default()
      .to_document()
      .map_err(io::Error::from)
      .map_err(|source| InitError::ConfigWrite {
        path: config.clone(),
        source,
      })?;
    fs::write(&config, doc).map_err(|source| InitError::ConfigWrite {
      path: config.clone(),
      source,
    })?;
    debug!("wrote default configuration to {}", config.display());
    ConfigAction::WroteDefault
  };
  Ok(StepOutcome::Configured(action))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use tempfile::TempDir;

  fn project() -> (TempDir, ProjectPaths) {
    let dir = TempDir::new().unwrap();
    let paths = ProjectPaths::new(dir.path());
    (dir, paths)
  }

  #[test]
  fn writes_default_without_template() {
    let (_dir, paths) = project();

    let outcome = setup_configuration(&paths).unwrap();

    assert_eq!(outcome, StepOutcome::Configured(ConfigAction::WroteDefault));
    let written: ProjectConfig =
      serde_json::from_str(&fs::read_to_string(paths.config()).unwrap()).unwrap();
    assert_eq!(written, ProjectConfig::default());
  }

  #[test]
  fn copies_template_verbatim() {
    let (_dir, paths) = project();
    let template = "{\n\t\"project\": {\"name\": \"Acme\"},\n\t\"custom\": [1, 2, 3]\n}";
    fs::write(paths.config_template(), template).unwrap();

    let outcome = setup_configuration(&paths).unwrap();

    assert_eq!(
      outcome,
      StepOutcome::Configured(ConfigAction::CopiedFromTemplate)
    );
    assert_eq!(fs::read_to_string(paths.config()).unwrap(), template);
  }

  #[test]
  fn existing_config_is_never_overwritten() {
    let (_dir, paths) = project();
    fs::write(paths.config(), "user edited").unwrap();
    fs::write(paths.config_template(), "{}").unwrap();

    let outcome = setup_configuration(&paths).unwrap();

    assert_eq!(outcome, StepOutcome::Configured(ConfigAction::AlreadyExists));
    assert_eq!(fs::read_to_string(paths.config()).unwrap(), "user edited");
  }

  #[test]
  fn write_failure_maps_to_config_error() {
    let dir = TempDir::new().unwrap();
    let paths = ProjectPaths::new(dir.path().join("missing-root"));

    let err = setup_configuration(&paths).unwrap_err();

    assert!(matches!(err, InitError::ConfigWrite { .. }), "{err:?}");
  }
}
