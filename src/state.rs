//! Observable state store for the todo list.
//!
//! [`TodoListState`] holds the ordered item sequence plus the three scalar
//! flags (`loading`, `error_message`, `initialized`) and publishes every
//! mutation through a [`tokio::sync::watch`] channel. Observers subscribe
//! with [`TodoListState::subscribe`] and always see a complete, consistent
//! [`TodoListSnapshot`]; notification happens synchronously inside the
//! mutating call.
//!
//! The store is exclusively mutated by the sync service (the mutators are
//! crate-private); everything else only reads it.

use tokio::sync::watch;

use crate::model::{Priority, TodoItem};

/// One consistent view of the todo list and its flags.
#[derive(Clone, Debug, Default)]
pub struct TodoListSnapshot {
    /// Items in display order (newest first after a load).
    pub todos: Vec<TodoItem>,
    /// Whether a load is currently in flight.
    pub loading: bool,
    /// Last load/refresh failure, if any.
    pub error_message: Option<String>,
    /// True once the first load attempt has completed, success or failure.
    pub initialized: bool,
}

impl TodoListSnapshot {
    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn high_priority_pending_count(&self) -> usize {
        self.todos
            .iter()
            .filter(|t| !t.completed && t.priority == Priority::High)
            .count()
    }

    /// Find an item by id.
    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }
}

/// Observable, mutable store for the current user's todo list.
pub struct TodoListState {
    tx: watch::Sender<TodoListSnapshot>,
}

impl TodoListState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(TodoListSnapshot::default());
        Self { tx }
    }

    /// Subscribe to state changes.
    ///
    /// The receiver is marked changed on every mutation; `borrow()` yields
    /// the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TodoListSnapshot> {
        self.tx.subscribe()
    }

    /// Current snapshot of the full state.
    pub fn snapshot(&self) -> TodoListSnapshot {
        self.tx.borrow().clone()
    }

    /// Current item sequence.
    pub fn todos(&self) -> Vec<TodoItem> {
        self.tx.borrow().todos.clone()
    }

    /// Find an item by id.
    pub fn get(&self, id: &str) -> Option<TodoItem> {
        self.tx.borrow().get(id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.tx.borrow().error_message.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.tx.borrow().initialized
    }

    pub fn total_count(&self) -> usize {
        self.tx.borrow().total_count()
    }

    pub fn completed_count(&self) -> usize {
        self.tx.borrow().completed_count()
    }

    pub fn pending_count(&self) -> usize {
        self.tx.borrow().pending_count()
    }

    pub fn high_priority_pending_count(&self) -> usize {
        self.tx.borrow().high_priority_pending_count()
    }

    // Mutators below are crate-private: only the sync service writes here.

    pub(crate) fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|s| s.loading = loading);
    }

    pub(crate) fn set_error_message(&self, message: Option<String>) {
        self.tx.send_modify(|s| s.error_message = message);
    }

    pub(crate) fn set_initialized(&self, initialized: bool) {
        self.tx.send_modify(|s| s.initialized = initialized);
    }

    /// Replace the whole sequence in one atomic step.
    pub(crate) fn replace_todos(&self, todos: Vec<TodoItem>) {
        self.tx.send_modify(|s| s.todos = todos);
    }

    /// Insert a freshly created item at the front (newest-first order).
    pub(crate) fn insert_first(&self, todo: TodoItem) {
        self.tx.send_modify(|s| s.todos.insert(0, todo));
    }

    /// Replace the item with the same id, keeping its position.
    pub(crate) fn replace_todo(&self, todo: TodoItem) {
        self.tx.send_modify(|s| {
            if let Some(slot) = s.todos.iter_mut().find(|t| t.id == todo.id) {
                *slot = todo;
            }
        });
    }

    /// Remove an item by id; silently does nothing if the id is absent.
    pub(crate) fn remove_todo(&self, id: &str) {
        self.tx.send_modify(|s| s.todos.retain(|t| t.id != id));
    }

    /// Remove every item whose id appears in `ids`, in one atomic step.
    pub(crate) fn remove_todos(&self, ids: &[String]) {
        self.tx
            .send_modify(|s| s.todos.retain(|t| !ids.iter().any(|id| *id == t.id)));
    }
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}
