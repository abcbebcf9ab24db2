//! Ordered fallback bookkeeping shared by every pipeline stage

use thiserror::Error;

use shared::{Diagnostic, Stage, stage_debug, stage_warn};
use crate::error::UpstreamFailure;

/// Why one fallback step did not produce the stage's value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    #[error(transparent)]
    Upstream(#[from] UpstreamFailure),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("skipped: {0}")]
    Skipped(String),
}

impl StepFailure {
    pub fn rejected(reason: impl Into<String>) -> Self {
        StepFailure::Rejected(reason.into())
    }
}

pub type StepResult<T> = Result<T, StepFailure>;

/// Value produced by a stage plus the steps that failed on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tracks the steps tried for one stage, in priority order.
///
/// The first step passed to [`Attempts::settle`] that succeeds wins; every
/// failure before it becomes a diagnostic.
#[derive(Debug)]
pub struct Attempts {
    stage: Stage,
    diagnostics: Vec<Diagnostic>,
}

impl Attempts {
    pub fn new(stage: Stage) -> Self {
        Self { stage, diagnostics: Vec::new() }
    }

    /// Record the result of one step, returning its value on success
    pub fn settle<T>(&mut self, step: &str, result: StepResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                stage_debug!(self.stage, step = step, "fallback step accepted");
                Some(value)
            }
            Err(failure) => {
                stage_warn!(self.stage, step = step, error = %failure, "fallback step failed");
                self.diagnostics.push(Diagnostic::new(self.stage, step, &failure));
                None
            }
        }
    }

    /// Close the stage with its final value
    pub fn finish<T>(self, value: T) -> Outcome<T> {
        Outcome { value, diagnostics: self.diagnostics }
    }
}
