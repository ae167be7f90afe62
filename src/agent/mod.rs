// src/agent/mod.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::context::Context;
use crate::dispatch::{CategoryRule, classify};
use crate::error::{AgentError, AgentResult};
use crate::model::{ResultItem, TaskSnapshot};
use crate::tools::PhaseInput;
use crate::validation::Command;

mod session;
pub use session::SessionHandle;

/// Drives commands through the phase pipeline, one task at a time.
pub struct BrowserAgent {
    context: Arc<Context>,
    session: SessionHandle,
}

impl BrowserAgent {
    pub fn new(context: Context) -> Self {
        let session = SessionHandle::new(&context.config);
        Self {
            context: Arc::new(context),
            session,
        }
    }

    /// Read access for observers. Cheap to clone.
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Opens a task for `command` and starts its pipeline in the background.
    ///
    /// Blank commands fail with [`AgentError::EmptyCommand`] and submissions
    /// while another task is processing fail with [`AgentError::Busy`]. Neither
    /// touches session state, so callers that treat them as no-ops can simply
    /// ignore the error.
    pub async fn run(&self, command: &str) -> AgentResult<TaskHandle> {
        let command = Command::parse(command)?;
        let task_id = match self.session.open(&command.original).await {
            Ok(id) => id,
            Err(err) => {
                warn!(command = %command.original, "submission rejected: {err}");
                return Err(err);
            }
        };
        info!(%task_id, command = %command.original, "task opened");

        let cancel = CancellationToken::new();
        let pipeline = Pipeline {
            task_id,
            rule: classify(&command.normalized),
            command,
            context: Arc::clone(&self.context),
            session: self.session.clone(),
            cancel: cancel.clone(),
        };
        let session = self.session.clone();

        let join = tokio::spawn(async move {
            match tokio::spawn(pipeline.run()).await {
                Ok(outcome) => outcome,
                // A panicking handler must still release the processing slot.
                Err(join_err) => {
                    let err = AgentError::from(join_err);
                    session.fail(task_id, &err).await;
                    Err(err)
                }
            }
        });

        Ok(TaskHandle {
            id: task_id,
            cancel,
            join,
        })
    }

    /// Runs a command to completion.
    pub async fn execute(&self, command: &str) -> AgentResult<TaskSnapshot> {
        self.run(command).await?.wait().await
    }
}

/// Handle to an in-flight task.
#[derive(Debug)]
pub struct TaskHandle {
    id: Uuid,
    cancel: CancellationToken,
    join: JoinHandle<AgentResult<TaskSnapshot>>,
}

impl TaskHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Requests cancellation. Takes effect at the next phase boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn wait(self) -> AgentResult<TaskSnapshot> {
        self.join.await?
    }
}

struct Pipeline {
    task_id: Uuid,
    command: Command,
    rule: &'static CategoryRule,
    context: Arc<Context>,
    session: SessionHandle,
    cancel: CancellationToken,
}

impl Pipeline {
    async fn run(self) -> AgentResult<TaskSnapshot> {
        let outcome = match self.advance().await {
            Ok(results) => self.session.complete(self.task_id, results).await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(snapshot) => {
                info!(
                    task_id = %self.task_id,
                    category = %self.rule.category,
                    elapsed_secs = snapshot.elapsed_secs.unwrap_or_default(),
                    "task completed"
                );
                Ok(snapshot)
            }
            Err(err) => {
                error!(task_id = %self.task_id, "task failed: {err}");
                self.session.fail(self.task_id, &err).await;
                Err(err)
            }
        }
    }

    async fn advance(&self) -> AgentResult<Vec<ResultItem>> {
        let input = PhaseInput {
            command: &self.command,
            rule: self.rule,
        };

        for step in &self.context.plan().steps {
            if self.cancel.is_cancelled() {
                return Err(AgentError::Cancelled);
            }

            let handler = self.context.handler_for(step.kind);
            let outcome = handler.execute(step, &input)?;
            self.session
                .record_phase(self.task_id, step, &outcome)
                .await?;
            debug!(
                task_id = %self.task_id,
                phase = %step.kind,
                handler = handler.name(),
                progress = step.target_progress,
                "{}",
                outcome.message
            );

            self.pause(step.latency).await;
        }

        if self.cancel.is_cancelled() {
            return Err(AgentError::Cancelled);
        }
        Ok(self.rule.results())
    }

    /// Simulated latency. Always yields so observers get a turn between phases.
    async fn pause(&self, latency: Duration) {
        if latency.is_zero() {
            tokio::task::yield_now().await;
            return;
        }
        tokio::select! {
            _ = tokio::time::sleep(latency) => {}
            _ = self.cancel.cancelled() => {}
        }
    }
}
