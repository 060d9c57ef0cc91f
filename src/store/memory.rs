//! In-process store implementation.
//!
//! `MemoryStore` keeps documents in a shared vector behind a mutex. It is
//! trait-complete and used by the integration tests and for local/offline
//! experimentation. It can hold arbitrary (including malformed) documents,
//! which makes the sync service's defensive load path testable, and it can
//! be switched into a failing mode to simulate remote outages.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::constants::{FIELD_CREATED_AT, FIELD_OWNER_ID};

use super::{Document, StoreError, TodoStore};

/// In-memory implementation of [`TodoStore`].
#[derive(Clone, Default)]
pub struct MemoryStore {
    docs: Arc<Mutex<Vec<Document>>>,
    fail_requests: Arc<AtomicBool>,
    op_log: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with pre-existing documents.
    pub fn with_documents(docs: Vec<Document>) -> Self {
        let store = Self::new();
        if let Ok(mut guard) = store.docs.lock() {
            *guard = docs;
        }
        store
    }

    /// When set, every subsequent operation fails with a network error and
    /// leaves the stored documents untouched.
    pub fn set_fail_requests(&self, fail: bool) {
        self.fail_requests.store(fail, Ordering::SeqCst);
    }

    /// All documents currently held, in insertion order.
    pub fn documents(&self) -> Vec<Document> {
        self.docs.lock().map(|docs| docs.clone()).unwrap_or_default()
    }

    /// Names of the operations performed so far, oldest first.
    pub fn operations(&self) -> Vec<String> {
        self.op_log.lock().map(|ops| ops.clone()).unwrap_or_default()
    }

    fn lock_docs(&self) -> Result<MutexGuard<'_, Vec<Document>>, StoreError> {
        self.docs
            .lock()
            .map_err(|_| StoreError::Other("store lock poisoned".to_string()))
    }

    fn record(&self, op: &str) -> Result<(), StoreError> {
        if let Ok(mut ops) = self.op_log.lock() {
            ops.push(op.to_string());
        }
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(StoreError::Network("simulated request failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    fn store_type(&self) -> &str {
        "memory"
    }

    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, StoreError> {
        self.record("query_by_owner")?;
        let docs = self.lock_docs()?;
        let mut result: Vec<Document> = docs
            .iter()
            .filter(|d| d.fields.get(FIELD_OWNER_ID).and_then(Value::as_str) == Some(owner_id))
            .cloned()
            .collect();
        result.sort_by_key(|d| {
            std::cmp::Reverse(d.fields.get(FIELD_CREATED_AT).and_then(Value::as_i64).unwrap_or(0))
        });
        Ok(result)
    }

    async fn set_document(&self, id: &str, fields: Map<String, Value>) -> Result<(), StoreError> {
        self.record("set_document")?;
        let mut docs = self.lock_docs()?;
        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => doc.fields = fields,
            None => docs.push(Document::new(id, fields)),
        }
        Ok(())
    }

    async fn update_document(&self, id: &str, patch: Map<String, Value>) -> Result<(), StoreError> {
        self.record("update_document")?;
        let mut docs = self.lock_docs()?;
        let doc = docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        for (key, value) in patch {
            doc.fields.insert(key, value);
        }
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
        self.record("delete_document")?;
        self.lock_docs()?.retain(|d| d.id != id);
        Ok(())
    }

    async fn delete_documents(&self, ids: &[String]) -> Result<(), StoreError> {
        self.record("delete_documents")?;
        // All-or-nothing: the failure check above runs before any removal.
        self.lock_docs()?.retain(|d| !ids.iter().any(|id| *id == d.id));
        Ok(())
    }
}
