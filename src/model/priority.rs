//! Todo priority levels.

use serde::{Deserialize, Serialize};

/// Priority of a todo item.
///
/// The integer value is the persisted and sortable representation: documents
/// store `priority` as an integer between 1 and 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// Persisted integer representation of this priority.
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Parse a persisted integer back into a priority.
    ///
    /// Unknown values fall back to [`Priority::Medium`] rather than failing,
    /// so a document written by a newer client still loads.
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => Priority::Low,
            2 => Priority::Medium,
            3 => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Human-readable name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
