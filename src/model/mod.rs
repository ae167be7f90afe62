// src/model/mod.rs

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Idle,
    Processing,
    Completed,
    Error,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Error)
    }
}

/// One run of the pipeline for a single command.
#[derive(Clone, Debug)]
pub struct Task {
    pub id: Uuid,
    pub command: String,
    pub status: TaskStatus,
    pub started_at: DateTime<Utc>,
    started: Instant,
    pub elapsed: Option<Duration>,
}

impl Task {
    pub fn open(command: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            command: command.to_string(),
            status: TaskStatus::Processing,
            started_at: Utc::now(),
            started: Instant::now(),
            elapsed: None,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.status == TaskStatus::Processing
    }

    pub fn running_time(&self) -> Duration {
        self.started.elapsed()
    }

    /// Moves the task into a terminal state. Terminal tasks are never reopened.
    pub fn finish(&mut self, status: TaskStatus) -> Duration {
        debug_assert!(status.is_terminal());
        let elapsed = self.running_time();
        self.status = status;
        self.elapsed = Some(elapsed);
        elapsed
    }
}

/// Observer-facing view of the current task.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    pub task_id: Option<Uuid>,
    pub command: Option<String>,
    pub status: TaskStatus,
    pub phase_label: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
}

/// One extracted or offered item. Rank is implied by position in the set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ResultItem {
    pub fn new(rank: usize, title: &str, description: &str, url: &str) -> Self {
        Self {
            id: rank.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            price: None,
            rating: None,
            image: None,
        }
    }

    pub fn priced(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }

    /// Ratings live on a 0–5 scale.
    pub fn rated(mut self, rating: f32) -> Self {
        self.rating = Some(rating.clamp(0.0, 5.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn finish_records_elapsed_time() {
        let mut task = Task::open("find flights");
        assert!(task.is_processing());

        tokio::time::advance(Duration::from_millis(1500)).await;
        let elapsed = task.finish(TaskStatus::Completed);

        assert_eq!(elapsed, Duration::from_millis(1500));
        assert_eq!(task.elapsed, Some(elapsed));
        assert!(!task.is_processing());
    }

    #[test]
    fn rating_is_clamped_to_scale() {
        let item = ResultItem::new(1, "t", "d", "https://example.com").rated(7.5);
        assert_eq!(item.rating, Some(5.0));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let item = ResultItem::new(2, "t", "d", "https://example.com").priced("$10");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "2");
        assert_eq!(json["price"], "$10");
        assert!(json.get("rating").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn idle_is_the_default_status() {
        let snapshot = TaskSnapshot::default();
        assert_eq!(snapshot.status, TaskStatus::Idle);
        assert_eq!(snapshot.progress, 0);
        assert!(snapshot.task_id.is_none());
    }
}
