// src/protocol/mod.rs

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PhaseLatencies;
use crate::memory::LogCategory;

pub mod events;
pub use events::SessionEvent;

/// The five pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Planning,
    BrowserLaunch,
    SiteNavigation,
    Interaction,
    Extraction,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 5] = [
        PhaseKind::Planning,
        PhaseKind::BrowserLaunch,
        PhaseKind::SiteNavigation,
        PhaseKind::Interaction,
        PhaseKind::Extraction,
    ];

    pub fn category(self) -> LogCategory {
        match self {
            PhaseKind::Planning => LogCategory::Planning,
            PhaseKind::BrowserLaunch | PhaseKind::SiteNavigation => LogCategory::Navigation,
            PhaseKind::Interaction => LogCategory::Interaction,
            PhaseKind::Extraction => LogCategory::Extraction,
        }
    }

    /// Label shown as the "current action" while the phase is active.
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Planning => "Analyzing command with LLM",
            PhaseKind::BrowserLaunch | PhaseKind::SiteNavigation => {
                "Launching browser and navigating to websites"
            }
            PhaseKind::Interaction => "Interacting with page elements",
            PhaseKind::Extraction => "Extracting and structuring data",
        }
    }

    /// Cumulative progress checkpoint reached when the phase starts.
    pub fn target_progress(self) -> u8 {
        match self {
            PhaseKind::Planning => 20,
            PhaseKind::BrowserLaunch => 40,
            PhaseKind::SiteNavigation => 60,
            PhaseKind::Interaction => 80,
            PhaseKind::Extraction => 90,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Planning => "planning",
            PhaseKind::BrowserLaunch => "browser launch",
            PhaseKind::SiteNavigation => "site navigation",
            PhaseKind::Interaction => "interaction",
            PhaseKind::Extraction => "extraction",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct PlanStep {
    pub kind: PhaseKind,
    pub category: LogCategory,
    pub label: &'static str,
    pub target_progress: u8,
    pub latency: Duration,
}

impl PlanStep {
    fn new(kind: PhaseKind, latency: Duration) -> Self {
        Self {
            kind,
            category: kind.category(),
            label: kind.label(),
            target_progress: kind.target_progress(),
            latency,
        }
    }
}

/// The fixed phase table every task walks through.
#[derive(Clone, Debug)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Canonical table with the default simulated latencies.
    pub fn standard() -> Self {
        Self::with_latencies(&PhaseLatencies::default())
    }

    pub fn with_latencies(latencies: &PhaseLatencies) -> Self {
        Self {
            steps: PhaseKind::ALL
                .into_iter()
                .map(|kind| PlanStep::new(kind, latencies.for_phase(kind)))
                .collect(),
        }
    }

    pub fn total_latency(&self) -> Duration {
        self.steps.iter().map(|step| step.latency).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_matches_phase_table() {
        let plan = Plan::standard();
        let rows: Vec<_> = plan
            .steps
            .iter()
            .map(|s| (s.category, s.target_progress, s.latency.as_millis()))
            .collect();

        assert_eq!(
            rows,
            vec![
                (LogCategory::Planning, 20, 800),
                (LogCategory::Navigation, 40, 600),
                (LogCategory::Navigation, 60, 500),
                (LogCategory::Interaction, 80, 700),
                (LogCategory::Extraction, 90, 600),
            ]
        );
        assert_eq!(plan.total_latency(), Duration::from_millis(3200));
    }

    #[test]
    fn checkpoints_strictly_increase_and_stay_below_completion() {
        let targets: Vec<u8> = PhaseKind::ALL.iter().map(|k| k.target_progress()).collect();
        assert!(targets.windows(2).all(|w| w[0] < w[1]));
        assert!(targets.iter().all(|&t| t < 100));
    }

    #[test]
    fn both_navigation_steps_share_a_label() {
        assert_eq!(
            PhaseKind::BrowserLaunch.label(),
            PhaseKind::SiteNavigation.label()
        );
    }
}
