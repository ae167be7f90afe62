// src/agent/session.rs

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

use crate::config::AgentConfig;
use crate::error::{AgentError, AgentResult};
use crate::memory::{ActivityLog, LogCategory, LogEntry, Memory};
use crate::model::{ResultItem, Task, TaskSnapshot, TaskStatus};
use crate::progress::{COMPLETE, ProgressTracker};
use crate::protocol::{PlanStep, SessionEvent};
use crate::tools::PhaseOutcome;

/// State owned by one agent session. The orchestrator is its only writer.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    task: Option<Task>,
    results: Vec<ResultItem>,
    log: ActivityLog,
    progress: ProgressTracker,
}

impl SessionState {
    fn new(config: &AgentConfig) -> Self {
        let log = match config.log_capacity {
            Some(capacity) => ActivityLog::bounded(capacity),
            None => ActivityLog::new(),
        };
        Self {
            log,
            ..Self::default()
        }
    }

    fn snapshot(&self) -> TaskSnapshot {
        let (progress, label) = self.progress.current();
        match &self.task {
            Some(task) => TaskSnapshot {
                task_id: Some(task.id),
                command: Some(task.command.clone()),
                status: task.status,
                phase_label: label.to_string(),
                progress,
                elapsed_secs: task.elapsed.map(|d| d.as_secs_f64()),
            },
            None => TaskSnapshot::default(),
        }
    }

    fn is_processing(&self) -> bool {
        self.task.as_ref().is_some_and(Task::is_processing)
    }

    fn current_task(&mut self, id: Uuid) -> AgentResult<&mut Task> {
        self.task
            .as_mut()
            .filter(|task| task.id == id && task.is_processing())
            .ok_or(AgentError::StaleTask(id))
    }
}

/// Shared, cloneable access to a session.
///
/// Observers only get read methods; mutation goes through the crate-private
/// methods the orchestrator calls between phases. The lock is never held
/// across a simulated delay.
#[derive(Clone)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    pub(crate) fn new(config: &AgentConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            state: Arc::new(RwLock::new(SessionState::new(config))),
            events,
        }
    }

    pub async fn snapshot(&self) -> TaskSnapshot {
        self.state.read().await.snapshot()
    }

    /// Activity log, newest first.
    pub async fn logs(&self) -> Vec<LogEntry> {
        self.state.read().await.log.all()
    }

    /// Results of the most recently completed task.
    pub async fn results(&self) -> Vec<ResultItem> {
        self.state.read().await.results.clone()
    }

    pub async fn is_processing(&self) -> bool {
        self.state.read().await.is_processing()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Claims the processing slot for a new task.
    pub(crate) async fn open(&self, command: &str) -> AgentResult<Uuid> {
        let mut state = self.state.write().await;
        if state.is_processing() {
            return Err(AgentError::Busy);
        }

        let task = Task::open(command);
        let id = task.id;
        state.progress.reset();
        state.task = Some(task);

        self.emit(SessionEvent::TaskOpened {
            task_id: id,
            command: command.to_string(),
        });
        Ok(id)
    }

    /// Advances progress to the step's checkpoint, then logs its outcome.
    pub(crate) async fn record_phase(
        &self,
        id: Uuid,
        step: &PlanStep,
        outcome: &PhaseOutcome,
    ) -> AgentResult<()> {
        let mut state = self.state.write().await;
        state.current_task(id)?;
        state.progress.set(step.target_progress)?;
        state.progress.set_label(step.label);
        let entry = state
            .log
            .append(step.category, &outcome.message, outcome.detail.as_deref());

        self.emit(SessionEvent::Progress {
            task_id: id,
            progress: step.target_progress,
            label: step.label.to_string(),
        });
        self.emit(SessionEvent::LogAppended(entry));
        Ok(())
    }

    /// Publishes results and closes the task as completed.
    pub(crate) async fn complete(
        &self,
        id: Uuid,
        results: Vec<ResultItem>,
    ) -> AgentResult<TaskSnapshot> {
        let mut state = self.state.write().await;
        state.current_task(id)?;
        state.progress.set(COMPLETE)?;
        state.progress.set_label("");

        let count = results.len();
        let elapsed = state.current_task(id)?.finish(TaskStatus::Completed);
        let detail = format!("Found {count} results in {:.1}s", elapsed.as_secs_f64());
        let entry = state.log.append(
            LogCategory::Completion,
            "Task completed successfully",
            Some(&detail),
        );
        state.results = results;

        // Subscribers see the completion entry before progress reaches 100.
        self.emit(SessionEvent::LogAppended(entry));
        self.emit(SessionEvent::Progress {
            task_id: id,
            progress: COMPLETE,
            label: String::new(),
        });
        self.emit(SessionEvent::Finished {
            task_id: id,
            status: TaskStatus::Completed,
            result_count: count,
        });
        Ok(state.snapshot())
    }

    /// Closes the task as failed. Progress stays at its last checkpoint and the
    /// previously published results are left alone.
    pub(crate) async fn fail(&self, id: Uuid, cause: &AgentError) {
        let mut state = self.state.write().await;
        let Ok(task) = state.current_task(id) else {
            return;
        };
        task.finish(TaskStatus::Error);
        state.progress.set_label("");

        let detail = cause.to_string();
        let entry = state
            .log
            .append(LogCategory::Error, "Task failed", Some(&detail));

        self.emit(SessionEvent::LogAppended(entry));
        self.emit(SessionEvent::Finished {
            task_id: id,
            status: TaskStatus::Error,
            result_count: 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Plan;

    fn session() -> SessionHandle {
        SessionHandle::new(&AgentConfig::instant())
    }

    #[tokio::test]
    async fn idle_session_snapshot() {
        let session = session();
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, TaskStatus::Idle);
        assert!(session.logs().await.is_empty());
        assert!(session.results().await.is_empty());
    }

    #[tokio::test]
    async fn second_open_is_rejected_while_processing() {
        let session = session();
        session.open("first").await.unwrap();

        let err = session.open("second").await.unwrap_err();
        assert!(matches!(err, AgentError::Busy));
        assert_eq!(session.snapshot().await.command.as_deref(), Some("first"));
        assert!(session.logs().await.is_empty());
    }

    #[tokio::test]
    async fn record_phase_updates_progress_then_logs() {
        let session = session();
        let id = session.open("iphone price").await.unwrap();
        let step = &Plan::standard().steps[0];

        session
            .record_phase(id, step, &PhaseOutcome::new("Parsing natural language command"))
            .await
            .unwrap();

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.progress, 20);
        assert_eq!(snapshot.phase_label, "Analyzing command with LLM");
        let logs = session.logs().await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].category, LogCategory::Planning);
    }

    #[tokio::test]
    async fn failure_keeps_previous_results_and_progress() {
        let session = session();
        let first = session.open("a").await.unwrap();
        let published = vec![ResultItem::new(1, "kept", "d", "https://example.com")];
        session.complete(first, published.clone()).await.unwrap();

        let second = session.open("b").await.unwrap();
        let step = &Plan::standard().steps[0];
        session
            .record_phase(second, step, &PhaseOutcome::new("planning"))
            .await
            .unwrap();
        session.fail(second, &AgentError::Cancelled).await;

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, TaskStatus::Error);
        assert_eq!(snapshot.progress, 20);
        assert_eq!(session.results().await, published);
        assert_eq!(session.logs().await[0].category, LogCategory::Error);
        assert!(!session.is_processing().await);
    }

    #[tokio::test]
    async fn completion_entry_is_pushed_before_full_progress() {
        let session = session();
        let mut events = session.subscribe();
        let id = session.open("iphone price").await.unwrap();
        session.complete(id, Vec::new()).await.unwrap();

        let mut order = Vec::new();
        while let Ok(event) = events.try_recv() {
            match event {
                SessionEvent::LogAppended(entry) => order.push(entry.category.to_string()),
                SessionEvent::Progress { progress, .. } => order.push(format!("{progress}%")),
                _ => {}
            }
        }
        assert_eq!(order, vec!["completion", "100%"]);
    }

    #[tokio::test]
    async fn finished_task_cannot_be_written_again() {
        let session = session();
        let id = session.open("a").await.unwrap();
        session.complete(id, Vec::new()).await.unwrap();

        let err = session.complete(id, Vec::new()).await.unwrap_err();
        assert!(matches!(err, AgentError::StaleTask(stale) if stale == id));
    }
}
