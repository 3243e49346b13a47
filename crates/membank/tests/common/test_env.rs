use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::{Builder, TempDir};

pub const MANIFEST_ONE_DEP: &str = r#"{
  "name": "landing-memory-bank",
  "dependencies": {
    "fs-extra": "^11.1.1"
  }
}
"#;

#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("membank-test-")
      .tempdir()
      .expect("temp dir");
    Self { temp }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn membank(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("membank")?;
    cmd.current_dir(self.path());
    cmd.env_remove("MEMBANK_LOG");
    Ok(cmd)
  }

  pub fn write(&self, rel: &str, contents: &str) -> Result<()> {
    let path = self.path().join(rel);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
  }

  pub fn read(&self, rel: &str) -> Result<String> {
    let path = self.path().join(rel);
    fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
  }

  /// Manifest with one dependency plus a README: the minimal valid project.
  pub fn seed_project(&self) -> Result<()> {
    self.write("package.json", MANIFEST_ONE_DEP)?;
    self.write("README.md", "# Landing Memory Bank\n")
  }

  /// Every path under the root, sorted, relative to the root.
  pub fn tree(&self) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    collect(self.path(), self.path(), &mut out)?;
    out.sort();
    Ok(out)
  }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    out.push(path.strip_prefix(root)?.to_path_buf());
    if path.is_dir() {
      collect(root, &path, out)?;
    }
  }
  Ok(())
}
