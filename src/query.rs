//! Pure filtering, sorting and search helpers over in-memory item lists.
//!
//! These functions never touch the network and never mutate their input; the
//! presentation layer derives its visible list from the state store through
//! them.

use serde::{Deserialize, Serialize};

use crate::model::{Priority, TodoItem};

/// Predicate over a single item, selecting which items a view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    All,
    Pending,
    Completed,
    HighPriority,
    MediumPriority,
    LowPriority,
}

impl FilterKind {
    /// Whether `item` passes this filter.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Pending => !item.completed,
            FilterKind::Completed => item.completed,
            FilterKind::HighPriority => item.priority == Priority::High,
            FilterKind::MediumPriority => item.priority == Priority::Medium,
            FilterKind::LowPriority => item.priority == Priority::Low,
        }
    }

    /// Human-readable name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            FilterKind::All => "All",
            FilterKind::Pending => "Pending",
            FilterKind::Completed => "Completed",
            FilterKind::HighPriority => "High Priority",
            FilterKind::MediumPriority => "Medium Priority",
            FilterKind::LowPriority => "Low Priority",
        }
    }
}

/// Ordering applied to a filtered item list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Title,
    Priority,
    CreatedAt,
    UpdatedAt,
    CompletionStatus,
}

impl SortKey {
    /// Human-readable name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Priority => "Priority",
            SortKey::CreatedAt => "Created",
            SortKey::UpdatedAt => "Updated",
            SortKey::CompletionStatus => "Completion",
        }
    }
}

/// Apply `filter` then order the survivors by `sort_key`.
///
/// Title sorts case-insensitively ascending; Priority sorts High first;
/// CreatedAt and UpdatedAt sort newest first; CompletionStatus puts
/// incomplete items before completed ones. The sort is stable, so items with
/// equal keys keep their prior relative order.
pub fn filter_and_sort(items: &[TodoItem], filter: FilterKind, sort_key: SortKey) -> Vec<TodoItem> {
    let mut result: Vec<TodoItem> = items.iter().filter(|item| filter.matches(item)).cloned().collect();

    match sort_key {
        SortKey::Title => result.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        SortKey::Priority => result.sort_by(|a, b| b.priority.value().cmp(&a.priority.value())),
        SortKey::CreatedAt => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::UpdatedAt => result.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::CompletionStatus => result.sort_by(|a, b| a.completed.cmp(&b.completed)),
    }

    result
}

/// Case-insensitive substring search against title or description.
///
/// An empty or whitespace-only query returns all items unchanged.
pub fn search(items: &[TodoItem], query: &str) -> Vec<TodoItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
