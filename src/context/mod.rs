// src/context/mod.rs

use std::collections::HashMap;

use crate::config::AgentConfig;
use crate::protocol::{PhaseKind, Plan};
use crate::tools::{PhaseHandler, SimulatedBrowser};

/// Runtime context for an agent: configuration and the phase handler registry.
pub struct Context {
    pub config: AgentConfig,
    handlers: HashMap<PhaseKind, Box<dyn PhaseHandler>>,
    fallback: Box<dyn PhaseHandler>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            config: AgentConfig::default(),
            handlers: HashMap::new(),
            fallback: Box::new(SimulatedBrowser),
        }
    }

    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs every phase without simulated delay.
    pub fn instant(mut self) -> Self {
        self.config.latency = AgentConfig::instant().latency;
        self
    }

    /// Overrides the handler for a single phase.
    pub fn register_handler<H: PhaseHandler + 'static>(
        mut self,
        kind: PhaseKind,
        handler: H,
    ) -> Self {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    pub fn handler_for(&self, kind: PhaseKind) -> &dyn PhaseHandler {
        self.handlers
            .get(&kind)
            .map(|boxed| boxed.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    pub fn plan(&self) -> Plan {
        Plan::with_latencies(&self.config.latency)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
