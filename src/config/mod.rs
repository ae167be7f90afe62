// src/config/mod.rs

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AgentError, AgentResult};
use crate::protocol::PhaseKind;

/// Simulated per-phase latency in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseLatencies {
    pub planning_ms: u64,
    pub browser_launch_ms: u64,
    pub site_navigation_ms: u64,
    pub interaction_ms: u64,
    pub extraction_ms: u64,
}

impl Default for PhaseLatencies {
    fn default() -> Self {
        Self {
            planning_ms: 800,
            browser_launch_ms: 600,
            site_navigation_ms: 500,
            interaction_ms: 700,
            extraction_ms: 600,
        }
    }
}

impl PhaseLatencies {
    pub fn zero() -> Self {
        Self {
            planning_ms: 0,
            browser_launch_ms: 0,
            site_navigation_ms: 0,
            interaction_ms: 0,
            extraction_ms: 0,
        }
    }

    pub fn for_phase(&self, kind: PhaseKind) -> Duration {
        let ms = match kind {
            PhaseKind::Planning => self.planning_ms,
            PhaseKind::BrowserLaunch => self.browser_launch_ms,
            PhaseKind::SiteNavigation => self.site_navigation_ms,
            PhaseKind::Interaction => self.interaction_ms,
            PhaseKind::Extraction => self.extraction_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Runtime settings for an agent session.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// log_capacity = 500
///
/// [latency]
/// planning_ms = 0
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    pub latency: PhaseLatencies,
    /// Maximum retained log entries; unbounded when absent.
    pub log_capacity: Option<usize>,
    /// Capacity of the session event channel.
    pub event_buffer: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            latency: PhaseLatencies::default(),
            log_capacity: None,
            event_buffer: 64,
        }
    }
}

impl AgentConfig {
    /// No simulated delay between phases.
    pub fn instant() -> Self {
        Self {
            latency: PhaseLatencies::zero(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(raw: &str) -> AgentResult<Self> {
        let config: AgentConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> AgentResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> AgentResult<()> {
        if self.log_capacity == Some(0) {
            return Err(AgentError::config("log_capacity must be at least 1"));
        }
        if self.event_buffer == 0 {
            return Err(AgentError::config("event_buffer must be at least 1"));
        }
        Ok(())
    }
}
