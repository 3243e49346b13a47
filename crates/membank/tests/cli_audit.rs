mod common;

use crate::common::test_env::TestEnv;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn audit_passes_after_init() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env.seed_project()?;
    env.membank()?.arg("init").assert().success();

    env
      .membank()?
      .arg("audit")
      .assert()
      .success()
      .stdout(predicates::str::contains("Final audit passed").from_utf8());
    Ok(())
  })
}

#[test]
fn audit_reports_missing_readme() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env.seed_project()?;
    env.membank()?.arg("init").assert().success();
    std::fs::remove_file(env.path().join("README.md"))?;

    env
      .membank()?
      .arg("audit")
      .assert()
      .code(1)
      .stderr(predicates::str::contains("initialization incomplete: missing README.md").from_utf8());
    Ok(())
  })
}

#[test]
fn audit_does_not_create_anything() -> Result<()> {
  TestEnv::run(|env| -> Result<()> {
    env.seed_project()?;
    let before = env.tree()?;

    env
      .membank()?
      .arg("audit")
      .assert()
      .code(1)
      .stderr(predicates::str::contains("missing config.json").from_utf8());

    assert_eq!(env.tree()?, before);
    Ok(())
  })
}
