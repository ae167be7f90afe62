// src/validation/mod.rs

use crate::error::{AgentError, AgentResult};

/// A submitted command that passed validation.
///
/// `original` keeps the user's casing for display and logging; `normalized`
/// is only used for rule matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub original: String,
    pub normalized: String,
}

impl Command {
    pub fn parse(raw: &str) -> AgentResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AgentError::EmptyCommand);
        }
        Ok(Self {
            original: trimmed.to_string(),
            normalized: trimmed.to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_commands_are_rejected() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(Command::parse(raw), Err(AgentError::EmptyCommand)));
        }
    }

    #[test]
    fn keeps_original_casing() {
        let command = Command::parse("  Find iPhone Price ").unwrap();
        assert_eq!(command.original, "Find iPhone Price");
        assert_eq!(command.normalized, "find iphone price");
    }
}
