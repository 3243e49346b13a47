//! The initialization pipeline.
//!
//! Six steps run strictly in order against a [`ProjectPaths`]. Steps share no
//! in-memory state: each one reads and writes the filesystem under the project
//! root. The first failing step aborts the run.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::ProjectPaths;
use crate::error::InitError;

pub mod audit;
pub mod configuration;
pub mod directories;
pub mod launchers;
pub mod prerequisites;
pub mod report;
pub mod state_marker;

pub use configuration::ConfigAction;
pub use report::{ConsoleReporter, Reporter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
  CheckPrerequisites,
  CreateDirectories,
  SetupConfiguration,
  InitializeStateMarker,
  CreateLauncherScripts,
  FinalAudit,
}

impl Step {
  /// Full sequence in execution order.
  pub const ALL: [Step; 6] = [
    Step::CheckPrerequisites,
    Step::CreateDirectories,
    Step::SetupConfiguration,
    Step::InitializeStateMarker,
    Step::CreateLauncherScripts,
    Step::FinalAudit,
  ];

  /// Pending status line shown while the step runs.
  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      Step::CheckPrerequisites => "Checking dependencies",
      Step::CreateDirectories => "Creating directory structure",
      Step::SetupConfiguration => "Setting up configuration",
      Step::InitializeStateMarker => "Initializing database",
      Step::CreateLauncherScripts => "Creating launcher scripts",
      Step::FinalAudit => "Running final audit",
    }
  }

  #[must_use]
  pub fn failure_label(self) -> &'static str {
    match self {
      Step::CheckPrerequisites => "Dependency check failed",
      Step::CreateDirectories => "Directory creation failed",
      Step::SetupConfiguration => "Configuration setup failed",
      Step::InitializeStateMarker => "Database initialization failed",
      Step::CreateLauncherScripts => "Launcher script creation failed",
      Step::FinalAudit => "Final audit failed",
    }
  }

  #[must_use]
  pub fn phase(self) -> Phase {
    match self {
      Step::CheckPrerequisites => Phase::Checking,
      Step::CreateDirectories => Phase::CreatingDirs,
      Step::SetupConfiguration => Phase::ConfiguringSystem,
      Step::InitializeStateMarker => Phase::InitializingState,
      Step::CreateLauncherScripts => Phase::CreatingScripts,
      Step::FinalAudit => Phase::Auditing,
    }
  }

  /// Run this step against the project tree.
  pub fn run(self, paths: &ProjectPaths) -> Result<StepOutcome, InitError> {
    match self {
      Step::CheckPrerequisites => prerequisites::check_prerequisites(paths),
      Step::CreateDirectories => directories::create_directory_structure(paths),
      Step::SetupConfiguration => configuration::setup_configuration(paths),
      Step::InitializeStateMarker => state_marker::initialize_state_marker(paths),
      Step::CreateLauncherScripts => launchers::create_launcher_scripts(paths),
      Step::FinalAudit => audit::final_audit(paths),
    }
  }
}

/// Process-level progress of a run. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
  NotStarted,
  Checking,
  CreatingDirs,
  ConfiguringSystem,
  InitializingState,
  CreatingScripts,
  Auditing,
  Done,
  Failed { step: Step, reason: String },
}

impl Phase {
  #[must_use]
  pub fn is_terminal(&self) -> bool {
    matches!(self, Phase::Done | Phase::Failed { .. })
  }
}

/// What a successful step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
  Checked { dependencies: usize },
  DirectoriesReady { created: Vec<&'static str> },
  Configured(ConfigAction),
  StateMarked { created: DateTime<Utc> },
  LaunchersWritten { scripts: Vec<PathBuf> },
  Audited,
}

impl fmt::Display for StepOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StepOutcome::Checked { dependencies } => {
        write!(f, "Dependencies checked ({dependencies} declared)")
      }
      StepOutcome::DirectoriesReady { created } if created.is_empty() => {
        write!(f, "Directory structure already in place")
      }
      StepOutcome::DirectoriesReady { created } => {
        write!(f, "Directory structure created ({})", created.join(", "))
      }
      StepOutcome::Configured(action) => write!(f, "{action}"),
      StepOutcome::StateMarked { .. } => write!(f, "Database initialized"),
      StepOutcome::LaunchersWritten { .. } => write!(f, "Launcher scripts created"),
      StepOutcome::Audited => write!(f, "Final audit passed"),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
  pub step: Step,
  pub outcome: StepOutcome,
}

/// Run `steps` in order, notifying `reporter` as each one starts and finishes.
///
/// Returns the outcomes in execution order, or the error of the first step
/// that failed. Steps after a failure are never started.
pub fn execute(
  paths: &ProjectPaths,
  steps: &[Step],
  reporter: &mut dyn Reporter,
) -> Result<Vec<StepReport>, InitError> {
  let mut reports = Vec::with_capacity(steps.len());
  for &step in steps {
    reporter.phase_changed(&step.phase());
    reporter.step_started(step);
    match step.run(paths) {
      Ok(outcome) => {
        reporter.step_succeeded(step, &outcome);
        reports.push(StepReport { step, outcome });
      }
      Err(err) => {
        reporter.step_failed(step, &err);
        reporter.phase_changed(&Phase::Failed {
          step,
          reason: err.to_string(),
        });
        return Err(err);
      }
    }
  }
  reporter.phase_changed(&Phase::Done);
  Ok(reports)
}

/// Run the full initialization sequence.
pub fn initialize(
  paths: &ProjectPaths,
  reporter: &mut dyn Reporter,
) -> Result<Vec<StepReport>, InitError> {
  execute(paths, &Step::ALL, reporter)
}
