// src/memory/mod.rs

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Planning,
    Navigation,
    Interaction,
    Extraction,
    Completion,
    Error,
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogCategory::Planning => "planning",
            LogCategory::Navigation => "navigation",
            LogCategory::Interaction => "interaction",
            LogCategory::Extraction => "extraction",
            LogCategory::Completion => "completion",
            LogCategory::Error => "error",
        };
        f.write_str(name)
    }
}

/// One immutable activity record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub category: LogCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A sink for agent activity: phase events, completions and failures.
pub trait Memory {
    fn append(&mut self, category: LogCategory, message: &str, detail: Option<&str>) -> LogEntry;
    /// Newest entry first.
    fn all(&self) -> Vec<LogEntry>;
}

/// In-memory activity log, newest first, optionally bounded.
#[derive(Default, Debug)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: Option<usize>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `capacity` entries, dropping the oldest first.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

impl Memory for ActivityLog {
    fn append(&mut self, category: LogCategory, message: &str, detail: Option<&str>) -> LogEntry {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            category,
            message: message.to_string(),
            detail: detail.map(str::to_string),
        };

        self.entries.push_front(entry.clone());
        if let Some(capacity) = self.capacity {
            self.entries.truncate(capacity);
        }
        entry
    }

    fn all(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_newest_first() {
        let mut log = ActivityLog::new();
        log.append(LogCategory::Planning, "first", None);
        log.append(LogCategory::Navigation, "second", Some("detail"));

        let all = log.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "second");
        assert_eq!(all[0].detail.as_deref(), Some("detail"));
        assert_eq!(all[1].message, "first");
        assert_eq!(all[1].detail, None);
    }

    #[test]
    fn append_returns_the_stored_entry() {
        let mut log = ActivityLog::new();
        let entry = log.append(LogCategory::Completion, "done", None);
        assert_eq!(log.latest(), Some(&entry));
    }

    #[test]
    fn identifiers_are_unique() {
        let mut log = ActivityLog::new();
        let a = log.append(LogCategory::Planning, "a", None);
        let b = log.append(LogCategory::Planning, "a", None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn bounded_log_drops_oldest() {
        let mut log = ActivityLog::bounded(2);
        for msg in ["one", "two", "three"] {
            log.append(LogCategory::Interaction, msg, None);
        }
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["three", "two"]);
    }

    #[test]
    fn entry_serializes_with_lowercase_category() {
        let mut log = ActivityLog::new();
        let entry = log.append(LogCategory::Extraction, "scrape", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["category"], "extraction");
        assert!(json.get("detail").is_none());
    }
}
