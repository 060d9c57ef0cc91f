//! Firelist - a Firebase-backed todo list synchronization library
//!
//! This library keeps a per-user todo collection in sync between an
//! observable in-memory state store and a managed remote document database.
//! It includes email/password authentication against the Identity Toolkit
//! REST API, a Firestore REST store implementation, and pure helpers for
//! filtering, sorting and searching the in-memory list.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`auth`] - Authentication collaborator and Identity Toolkit client
//! * [`config`] - Application configuration management
//! * [`model`] - Todo item value types
//! * [`query`] - Pure filtering, sorting and search helpers
//! * [`state`] - Observable state store for the todo list
//! * [`store`] - Remote document store abstraction and implementations
//! * [`sync`] - Synchronization service reconciling local and remote state

/// Authentication collaborator and Identity Toolkit REST client
pub mod auth;

/// Configuration module for managing library settings
pub mod config;

/// Library constants and default values
pub mod constants;

/// In-memory operation log for in-app display
pub mod logger;

/// Todo item value types and document mapping
pub mod model;

/// Pure filtering, sorting and search helpers
pub mod query;

/// Observable state store holding the todo list
pub mod state;

/// Remote document store abstraction and implementations
pub mod store;

/// Synchronization service between state store and remote store
pub mod sync;

/// Utility functions for date/time handling
pub mod utils;

// Re-export the main types for convenient access
pub use auth::{AuthProvider, AuthUser, SessionAuth};
pub use model::{Priority, TodoItem};
pub use query::{filter_and_sort, search, FilterKind, SortKey};
pub use state::{TodoListSnapshot, TodoListState};
pub use store::{StoreError, TodoStore};
pub use sync::{SyncError, TodoSyncService};
