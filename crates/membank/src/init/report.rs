use log::debug;

use super::{Phase, Step, StepOutcome};
use crate::error::InitError;
use crate::{log_error, log_info, log_success};

/// Observer notified by [`super::execute`] as the pipeline progresses.
pub trait Reporter {
  fn phase_changed(&mut self, phase: &Phase);
  fn step_started(&mut self, step: Step);
  fn step_succeeded(&mut self, step: Step, outcome: &StepOutcome);
  fn step_failed(&mut self, step: Step, err: &InitError);
}

/// Prints one status line per step.
#[derive(Debug)]
pub struct ConsoleReporter {
  phase: Phase,
}

impl ConsoleReporter {
  #[must_use]
  pub fn new() -> Self {
    Self {
      phase: Phase::NotStarted,
    }
  }

  #[must_use]
  pub fn phase(&self) -> &Phase {
    &self.phase
  }
}

impl Default for ConsoleReporter {
  fn default() -> Self {
    Self::new()
  }
}

impl Reporter for ConsoleReporter {
  fn phase_changed(&mut self, phase: &Phase) {
    debug!("phase {:?} -> {:?}", self.phase, phase);
    self.phase = phase.clone();
  }

  fn step_started(&mut self, step: Step) {
    log_info!("{}...", step.label());
  }

  fn step_succeeded(&mut self, _step: Step, outcome: &StepOutcome) {
    log_success!("✔ {outcome}");
  }

  fn step_failed(&mut self, step: Step, _err: &InitError) {
    log_error!("✖ {}", step.failure_label());
  }
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ReportEvent {
  Started(Step),
  Succeeded(Step),
  Failed(Step),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
  pub events: Vec<ReportEvent>,
  pub phases: Vec<Phase>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
  fn phase_changed(&mut self, phase: &Phase) {
    self.phases.push(phase.clone());
  }

  fn step_started(&mut self, step: Step) {
    self.events.push(ReportEvent::Started(step));
  }

  fn step_succeeded(&mut self, step: Step, _outcome: &StepOutcome) {
    self.events.push(ReportEvent::Succeeded(step));
  }

  fn step_failed(&mut self, step: Step, _err: &InitError) {
    self.events.push(ReportEvent::Failed(step));
  }
}
