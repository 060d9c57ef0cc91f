//! In-memory operation log.
//!
//! The sync service can carry one of these so an embedding application can
//! show recent sync activity without wiring up a `log` backend. Entries are
//! timestamped strings kept in memory only.

use chrono::Utc;
use std::sync::{Arc, Mutex};

/// Shared logger that can be cloned across the application.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry.
    pub fn log(&self, message: impl AsRef<str>) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let formatted = format!("[{}] {}", timestamp, message.as_ref());

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(formatted);
        }
    }

    /// Get all entries, newest first.
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut result = entries.clone();
            result.reverse();
            result
        } else {
            Vec::new()
        }
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
