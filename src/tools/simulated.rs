// src/tools/simulated.rs

use crate::error::AgentResult;
use crate::protocol::{PhaseKind, PlanStep};
use crate::tools::{PhaseHandler, PhaseInput, PhaseOutcome};

/// Default handler: narrates a browsing session without touching the network.
pub struct SimulatedBrowser;

impl PhaseHandler for SimulatedBrowser {
    fn name(&self) -> &str {
        "simulated_browser"
    }

    fn execute(&self, step: &PlanStep, input: &PhaseInput<'_>) -> AgentResult<PhaseOutcome> {
        let rule = input.rule;
        let outcome = match step.kind {
            PhaseKind::Planning => PhaseOutcome::new("Parsing natural language command")
                .with_detail(input.command.original.as_str()),
            PhaseKind::BrowserLaunch => PhaseOutcome::new("Opening browser session")
                .with_detail("Chrome Headless initialized"),
            PhaseKind::SiteNavigation => {
                let count = rule.sites.len();
                let noun = if count == 1 { "website" } else { "websites" };
                PhaseOutcome::new(format!("Navigating to {}", rule.primary_site()))
                    .with_detail(format!("Visiting {count} {noun} for comparison"))
            }
            PhaseKind::Interaction => PhaseOutcome::new(rule.interaction)
                .with_detail("Automated form filling and filtering"),
            PhaseKind::Extraction => PhaseOutcome::new(rule.extraction)
                .with_detail(format!("Found {} matching results", rule.results().len())),
        };
        Ok(outcome)
    }
}
