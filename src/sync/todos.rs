//! Mutating todo operations on the sync service.
//!
//! Every operation here follows the same ordering: validate locally, perform
//! the remote write, and only mirror the change into the state store once
//! the remote call has succeeded. A remote failure therefore never mutates
//! the local item sequence.

use log::info;
use serde_json::{json, Map};
use uuid::Uuid;

use crate::constants::{
    FIELD_DESCRIPTION, FIELD_IS_COMPLETED, FIELD_PRIORITY, FIELD_TITLE, FIELD_UPDATED_AT,
};
use crate::model::{Priority, TodoItem};
use crate::sync::{SyncError, TodoSyncService};
use crate::utils::datetime;

impl TodoSyncService {
    /// Creates a new todo remotely and inserts it at the front of the list.
    ///
    /// The id and both timestamps are generated client-side. The item enters
    /// the state store only after the remote write succeeds; on failure no
    /// local item is created.
    ///
    /// # Arguments
    /// * `title` - Item title; trimmed, must not end up empty
    /// * `description` - Free-form description, may be empty
    /// * `priority` - Priority level for the new item
    ///
    /// # Returns
    /// The created item as it now exists locally and remotely.
    pub async fn add_todo(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<TodoItem, SyncError> {
        let user = self.current_user()?;
        let title = title.trim();
        if title.is_empty() {
            return Err(SyncError::InvalidInput("title cannot be empty".to_string()));
        }

        let now = datetime::now_ms();
        let todo = TodoItem {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            priority,
            created_at: now,
            updated_at: now,
            owner_id: user.user_id,
        };

        self.store.set_document(&todo.id, todo.to_fields()).await?;

        info!("✅ Created todo {}", todo.id);
        self.record(&format!("Created todo '{}'", todo.title));
        self.state.insert_first(todo.clone());
        Ok(todo)
    }

    /// Updates title, description and optionally priority of an existing
    /// todo.
    ///
    /// Only fields that actually changed are written remotely, plus a
    /// refreshed `updatedAt`. When nothing changed the call succeeds
    /// immediately without any remote write.
    pub async fn update_todo(
        &self,
        id: &str,
        title: &str,
        description: &str,
        priority: Option<Priority>,
    ) -> Result<(), SyncError> {
        self.current_user()?;
        if id.trim().is_empty() {
            return Err(SyncError::InvalidInput("id cannot be empty".to_string()));
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(SyncError::InvalidInput("title cannot be empty".to_string()));
        }

        let current = self
            .state
            .get(id)
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;

        // Delta patch: only fields that actually changed.
        let mut patch = Map::new();
        if title != current.title {
            patch.insert(FIELD_TITLE.to_string(), json!(title));
        }
        if description != current.description {
            patch.insert(FIELD_DESCRIPTION.to_string(), json!(description));
        }
        if let Some(p) = priority {
            if p != current.priority {
                patch.insert(FIELD_PRIORITY.to_string(), json!(p.value()));
            }
        }
        if patch.is_empty() {
            // Nothing changed; skip the remote round trip entirely.
            return Ok(());
        }

        let now = datetime::now_ms();
        patch.insert(FIELD_UPDATED_AT.to_string(), json!(now));

        self.store.update_document(id, patch).await?;

        info!("✅ Updated todo {id}");
        self.record(&format!("Updated todo '{title}'"));
        self.state.replace_todo(TodoItem {
            title: title.to_string(),
            description: description.to_string(),
            priority: priority.unwrap_or(current.priority),
            updated_at: now,
            ..current
        });
        Ok(())
    }

    /// Flips the completion flag of a todo.
    ///
    /// Writes exactly `isCompleted` and `updatedAt` remotely, then mirrors
    /// both locally. Calling it twice returns the item to its original
    /// state.
    pub async fn toggle_complete(&self, id: &str) -> Result<(), SyncError> {
        self.current_user()?;
        let current = self
            .state
            .get(id)
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;

        let completed = !current.completed;
        let now = datetime::now_ms();
        let mut patch = Map::new();
        patch.insert(FIELD_IS_COMPLETED.to_string(), json!(completed));
        patch.insert(FIELD_UPDATED_AT.to_string(), json!(now));

        self.store.update_document(id, patch).await?;

        info!("✅ Toggled todo {id} to completed={completed}");
        self.record(&format!("Toggled todo '{}'", current.title));
        self.state.replace_todo(TodoItem {
            completed,
            updated_at: now,
            ..current
        });
        Ok(())
    }

    /// Deletes one todo remotely, then removes it from the list.
    ///
    /// Removal by id is no-op-safe locally: if the item vanished in the
    /// meantime the local removal simply matches nothing.
    pub async fn delete_todo(&self, id: &str) -> Result<(), SyncError> {
        self.current_user()?;
        if id.trim().is_empty() {
            return Err(SyncError::InvalidInput("id cannot be empty".to_string()));
        }

        self.store.delete_document(id).await?;

        info!("✅ Deleted todo {id}");
        self.record("Deleted todo");
        self.state.remove_todo(id);
        Ok(())
    }

    /// Deletes every currently completed todo in one atomic batch.
    ///
    /// With nothing completed this returns `Ok(0)` without a remote call.
    /// The local subset is removed only after the whole batch succeeds, so a
    /// partial remote failure never partially mutates local state.
    ///
    /// # Returns
    /// The number of todos removed.
    pub async fn delete_completed_todos(&self) -> Result<usize, SyncError> {
        self.current_user()?;
        let ids: Vec<String> = self
            .state
            .todos()
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id.clone())
            .collect();
        if ids.is_empty() {
            return Ok(0);
        }

        self.store.delete_documents(&ids).await?;

        info!("✅ Deleted {} completed todos", ids.len());
        self.record(&format!("Deleted {} completed todos", ids.len()));
        self.state.remove_todos(&ids);
        Ok(ids.len())
    }

    /// Deletes every todo in the list in one atomic batch.
    ///
    /// Same shape as [`TodoSyncService::delete_completed_todos`], over the
    /// full current set.
    pub async fn delete_all_todos(&self) -> Result<usize, SyncError> {
        self.current_user()?;
        let ids: Vec<String> = self.state.todos().iter().map(|t| t.id.clone()).collect();
        if ids.is_empty() {
            return Ok(0);
        }

        self.store.delete_documents(&ids).await?;

        info!("✅ Deleted all {} todos", ids.len());
        self.record(&format!("Deleted all {} todos", ids.len()));
        self.state.remove_todos(&ids);
        Ok(ids.len())
    }
}
