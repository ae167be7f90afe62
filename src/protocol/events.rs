// src/protocol/events.rs

use serde::Serialize;
use uuid::Uuid;

use crate::memory::LogEntry;
use crate::model::TaskStatus;

/// Pushed to session subscribers as the orchestrator mutates state.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SessionEvent {
    TaskOpened { task_id: Uuid, command: String },
    Progress { task_id: Uuid, progress: u8, label: String },
    LogAppended(LogEntry),
    Finished { task_id: Uuid, status: TaskStatus, result_count: usize },
}

impl SessionEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Finished { .. })
    }
}
