// src/error/mod.rs

use thiserror::Error;
use uuid::Uuid;

use crate::protocol::PhaseKind;

/// Everything that can stop a command from becoming a completed task.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A task is already processing; the submission was dropped.
    #[error("a task is already processing")]
    Busy,

    #[error("command is empty")]
    EmptyCommand,

    /// A phase handler (or the pipeline around it) failed.
    #[error("{phase} phase failed: {cause}")]
    PhaseFailed { phase: PhaseKind, cause: String },

    #[error("task was cancelled")]
    Cancelled,

    #[error("task {0} is no longer the current task")]
    StaleTask(Uuid),

    #[error("progress cannot move from {current}% to {requested}%")]
    ProgressRegression { current: u8, requested: u8 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("pipeline task aborted: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type AgentResult<T> = Result<T, AgentError>;

impl AgentError {
    pub fn phase(phase: PhaseKind, cause: impl Into<String>) -> Self {
        Self::PhaseFailed {
            phase,
            cause: cause.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Rejections happen before a task is opened and leave no trace in the session.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Busy | Self::EmptyCommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_error_names_the_phase() {
        let err = AgentError::phase(PhaseKind::Interaction, "selector not found");
        assert_eq!(err.to_string(), "interaction phase failed: selector not found");
    }

    #[test]
    fn rejections_are_distinguished_from_failures() {
        assert!(AgentError::Busy.is_rejection());
        assert!(AgentError::EmptyCommand.is_rejection());
        assert!(!AgentError::Cancelled.is_rejection());
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AgentError = json_err.into();
        assert!(matches!(err, AgentError::Serialization(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn regression_message_shows_both_values() {
        let err = AgentError::ProgressRegression {
            current: 60,
            requested: 40,
        };
        assert_eq!(err.to_string(), "progress cannot move from 60% to 40%");
    }
}
