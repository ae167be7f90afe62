// src/tools/mod.rs

use crate::dispatch::CategoryRule;
use crate::error::AgentResult;
use crate::protocol::PlanStep;
use crate::validation::Command;

pub mod simulated;
pub use simulated::SimulatedBrowser;

/// What a phase reports to the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOutcome {
    pub message: String,
    pub detail: Option<String>,
}

impl PhaseOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Everything a handler may look at while running a phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseInput<'a> {
    pub command: &'a Command,
    /// The dispatch rule selected for this command.
    pub rule: &'static CategoryRule,
}

/// Trait that defines a pluggable handler for one or more pipeline phases.
pub trait PhaseHandler: Send + Sync {
    fn name(&self) -> &str;
    fn execute(&self, step: &PlanStep, input: &PhaseInput<'_>) -> AgentResult<PhaseOutcome>;
}
