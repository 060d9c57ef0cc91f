//! Document store abstraction for the remote todo collection.
//!
//! This module defines the common interface the sync service uses to talk to
//! the remote per-user document collection, along with the raw document type
//! and error handling. Implementations: [`firestore::FirestoreStore`] for the
//! real backend and [`memory::MemoryStore`] for tests and local use.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

/// Common error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Store error: {0}")]
    Other(String),
}

/// Raw document as held in the remote collection: the document key plus a
/// flat map of plain JSON field values.
///
/// Store implementations translate their wire representation to and from
/// this shape; defensive parsing into [`crate::model::TodoItem`] happens
/// above the trait, in one place.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { id: id.into(), fields }
    }
}

/// Store trait every remote document backend must implement.
///
/// One document per todo item, keyed by the item id. All methods are a
/// single remote round trip; `delete_documents` is atomic, succeeding or
/// failing as a unit.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns the store type identifier (e.g., "firestore", "memory").
    fn store_type(&self) -> &str;

    /// Fetch all documents owned by `owner_id`, ordered by `createdAt`
    /// descending.
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, StoreError>;

    /// Full-document set (replace), used only when creating an item.
    async fn set_document(&self, id: &str, fields: Map<String, Value>) -> Result<(), StoreError>;

    /// Field-subset update: writes exactly the fields present in `patch`.
    async fn update_document(&self, id: &str, patch: Map<String, Value>) -> Result<(), StoreError>;

    /// Delete a single document. Deleting an absent document is not an error.
    async fn delete_document(&self, id: &str) -> Result<(), StoreError>;

    /// Atomically delete every listed document in one batch.
    async fn delete_documents(&self, ids: &[String]) -> Result<(), StoreError>;
}
