use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "package.json";
pub const CONFIG_FILE: &str = "config.json";
pub const CONFIG_TEMPLATE_FILE: &str = "config.example.json";
pub const README_FILE: &str = "README.md";

pub const DATA_DIR: &str = "data";
pub const LOGS_DIR: &str = "logs";
pub const BACKUPS_DIR: &str = "backups";
pub const SRC_DIR: &str = "src";
pub const DIST_DIR: &str = "dist";
pub const TESTS_DIR: &str = "tests";
pub const SCRIPTS_DIR: &str = "scripts";

/// Directories created by the initializer, in creation order.
pub const DIRECTORY_SET: [&str; 6] = [DATA_DIR, LOGS_DIR, BACKUPS_DIR, SRC_DIR, DIST_DIR, TESTS_DIR];

pub const STATE_MARKER_FILE: &str = "db-structure.json";
pub const SENTINEL_FILE: &str = ".gitkeep";

/// Fixed locations of every artifact, resolved once against the project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
  root: PathBuf,
}

impl ProjectPaths {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  #[must_use]
  pub fn root(&self) -> &Path {
    &self.root
  }

  #[must_use]
  pub fn manifest(&self) -> PathBuf {
    self.root.join(MANIFEST_FILE)
  }

  #[must_use]
  pub fn config(&self) -> PathBuf {
    self.root.join(CONFIG_FILE)
  }

  #[must_use]
  pub fn config_template(&self) -> PathBuf {
    self.root.join(CONFIG_TEMPLATE_FILE)
  }

  #[must_use]
  pub fn data_dir(&self) -> PathBuf {
    self.root.join(DATA_DIR)
  }

  #[must_use]
  pub fn scripts_dir(&self) -> PathBuf {
    self.root.join(SCRIPTS_DIR)
  }

  #[must_use]
  pub fn state_marker(&self) -> PathBuf {
    self.data_dir().join(STATE_MARKER_FILE)
  }

  #[must_use]
  pub fn sentinel(&self) -> PathBuf {
    self.data_dir().join(SENTINEL_FILE)
  }

  /// Absolute paths of [`DIRECTORY_SET`], paired with their names.
  #[must_use]
  pub fn directories(&self) -> Vec<(&'static str, PathBuf)> {
    DIRECTORY_SET
      .iter()
      .map(|name| (*name, self.root.join(name)))
      .collect()
  }
}

#[derive(Debug, Clone)]
pub struct AppContext {
  pub paths: ProjectPaths,
}

impl AppContext {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      paths: ProjectPaths::new(root),
    }
  }
}

/// Project configuration written to `config.json` when no template exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
  pub project: ProjectSection,
  pub system: SystemSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
  pub name: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub complexity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSection {
  pub auto_mode: bool,
  pub memory_bank_size: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      project: ProjectSection {
        name: "Landing Memory Bank Project".to_string(),
        kind: "landing-page".to_string(),
        complexity: "medium".to_string(),
      },
      system: SystemSection {
        auto_mode: true,
        memory_bank_size: "1GB".to_string(),
      },
    }
  }
}

impl ProjectConfig {
  /// Render as pretty JSON with two-space indentation and a trailing newline.
  pub fn to_document(&self) -> serde_json::Result<String> {
    let mut doc = serde_json::to_string_pretty(self)?;
    doc.push('\n');
    Ok(doc)
  }
}
