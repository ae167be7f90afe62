// src/progress/mod.rs

use crate::error::{AgentError, AgentResult};

pub const COMPLETE: u8 = 100;

/// Completion percentage and current phase label for the active task.
#[derive(Debug, Default, Clone)]
pub struct ProgressTracker {
    percentage: u8,
    label: String,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves progress forward. Equal values are accepted, decreases are not.
    pub fn set(&mut self, percentage: u8) -> AgentResult<()> {
        if percentage > COMPLETE || percentage < self.percentage {
            return Err(AgentError::ProgressRegression {
                current: self.percentage,
                requested: percentage,
            });
        }
        self.percentage = percentage;
        Ok(())
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn current(&self) -> (u8, &str) {
        (self.percentage, &self.label)
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn is_complete(&self) -> bool {
        self.percentage == COMPLETE
    }

    /// Only called when a new task is opened.
    pub(crate) fn reset(&mut self) {
        self.percentage = 0;
        self.label.clear();
    }
}
