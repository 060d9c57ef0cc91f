//! Firestore store implementation.
//!
//! This module implements the [`TodoStore`] trait over the Firestore REST
//! API: `runQuery` for the owner-scoped load, `PATCH` on the document path
//! for set and masked update, `DELETE` for single removal, and the
//! `documents:commit` RPC for the atomic multi-delete batch. Firestore's
//! typed value objects are translated to and from plain JSON at this
//! boundary so the rest of the library never sees them.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::auth::AuthProvider;
use crate::config::Config;
use crate::constants::{FIELD_CREATED_AT, FIELD_OWNER_ID, FIRESTORE_BASE_URL};

use super::{Document, StoreError, TodoStore};

/// Firestore-backed implementation of [`TodoStore`].
pub struct FirestoreStore {
    http: reqwest::Client,
    auth: Arc<dyn AuthProvider>,
    base_url: String,
    /// Resource path of the database's document root, e.g.
    /// `projects/my-app/databases/(default)/documents`.
    documents_path: String,
    collection: String,
}

impl FirestoreStore {
    pub fn new(
        project_id: impl Into<String>,
        database_id: impl Into<String>,
        collection: impl Into<String>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            base_url: FIRESTORE_BASE_URL.to_string(),
            documents_path: format!(
                "projects/{}/databases/{}/documents",
                project_id.into(),
                database_id.into()
            ),
            collection: collection.into(),
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &Config, auth: Arc<dyn AuthProvider>) -> Result<Self> {
        let firebase = &config.firebase;
        if firebase.project_id.is_empty() {
            anyhow::bail!("firebase.project_id is not configured");
        }
        Ok(Self::new(
            &firebase.project_id,
            &firebase.database_id,
            &firebase.collection,
            auth,
        ))
    }

    /// Override the endpoint, e.g. to point at a Firestore emulator.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full resource name of a document, as the commit RPC wants it.
    fn document_name(&self, id: &str) -> String {
        format!("{}/{}/{}", self.documents_path, self.collection, id)
    }

    /// URL of a single document.
    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, self.document_name(id))
    }

    fn bearer_token(&self) -> Result<String, StoreError> {
        self.auth
            .current_user()
            .map(|u| u.id_token)
            .ok_or_else(|| StoreError::Auth("no signed-in user".to_string()))
    }

    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            401 | 403 => StoreError::Auth(format!("{status}: {body}")),
            404 => StoreError::NotFound(body),
            _ => StoreError::Network(format!("{status}: {body}")),
        })
    }
}

#[async_trait]
impl TodoStore for FirestoreStore {
    fn store_type(&self) -> &str {
        "firestore"
    }

    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Document>, StoreError> {
        let token = self.bearer_token()?;
        let url = format!("{}/{}:runQuery", self.base_url, self.documents_path);
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": FIELD_OWNER_ID },
                        "op": "EQUAL",
                        "value": { "stringValue": owner_id },
                    }
                },
                "orderBy": [{
                    "field": { "fieldPath": FIELD_CREATED_AT },
                    "direction": "DESCENDING",
                }],
            }
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::check_response(response).await?;

        let results: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidData(format!("Malformed query response: {e}")))?;

        // runQuery streams one object per result; entries without a
        // "document" key carry only read metadata.
        let mut documents = Vec::new();
        for entry in &results {
            let Some(doc) = entry.get("document") else { continue };
            let Some(name) = doc.get("name").and_then(Value::as_str) else { continue };
            let Some(id) = name.rsplit('/').next() else { continue };
            let fields = doc
                .get("fields")
                .and_then(Value::as_object)
                .map(|fields| {
                    fields
                        .iter()
                        .map(|(k, v)| (k.clone(), from_firestore_value(v)))
                        .collect()
                })
                .unwrap_or_default();
            documents.push(Document::new(id, fields));
        }
        Ok(documents)
    }

    async fn set_document(&self, id: &str, fields: Map<String, Value>) -> Result<(), StoreError> {
        let token = self.bearer_token()?;
        let body = json!({ "fields": to_firestore_fields(&fields) });

        let response = self
            .http
            .patch(self.document_url(id))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn update_document(&self, id: &str, patch: Map<String, Value>) -> Result<(), StoreError> {
        let token = self.bearer_token()?;
        let mask: Vec<(&str, &String)> = patch.keys().map(|k| ("updateMask.fieldPaths", k)).collect();
        let body = json!({ "fields": to_firestore_fields(&patch) });

        let response = self
            .http
            .patch(self.document_url(id))
            .query(&mask)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
        let token = self.bearer_token()?;
        let response = self
            .http
            .delete(self.document_url(id))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn delete_documents(&self, ids: &[String]) -> Result<(), StoreError> {
        let token = self.bearer_token()?;
        let url = format!("{}/{}:commit", self.base_url, self.documents_path);
        let writes: Vec<Value> = ids.iter().map(|id| json!({ "delete": self.document_name(id) })).collect();
        let body = json!({ "writes": writes });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_response(response).await?;
        Ok(())
    }
}

/// Translate a plain JSON scalar into a Firestore typed value object.
///
/// The todo schema only carries strings, booleans and integers; anything
/// else degrades to its string rendering.
fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::String(s) => json!({ "stringValue": s }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) if n.is_i64() => json!({ "integerValue": n.to_string() }),
        Value::Number(n) => json!({ "doubleValue": n }),
        Value::Null => json!({ "nullValue": null }),
        other => json!({ "stringValue": other.to_string() }),
    }
}

fn to_firestore_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), to_firestore_value(v)))
        .collect()
}

/// Translate a Firestore typed value object back into a plain JSON scalar.
///
/// `integerValue` arrives string-encoded; unrecognized kinds become null so
/// the defensive parse above this layer can apply its fallbacks.
pub(crate) fn from_firestore_value(value: &Value) -> Value {
    if let Some(s) = value.get("stringValue").and_then(Value::as_str) {
        return Value::String(s.to_string());
    }
    if let Some(b) = value.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(b);
    }
    if let Some(i) = value.get("integerValue") {
        let parsed = match i {
            Value::String(s) => s.parse::<i64>().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
        if let Some(n) = parsed {
            return json!(n);
        }
    }
    if let Some(d) = value.get("doubleValue").and_then(Value::as_f64) {
        return json!(d);
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_translation_round_trip() {
        let mut fields = Map::new();
        fields.insert("title".to_string(), json!("groceries"));
        fields.insert("isCompleted".to_string(), json!(false));
        fields.insert("priority".to_string(), json!(2));

        let wire = to_firestore_fields(&fields);
        assert_eq!(wire["title"], json!({ "stringValue": "groceries" }));
        assert_eq!(wire["isCompleted"], json!({ "booleanValue": false }));
        assert_eq!(wire["priority"], json!({ "integerValue": "2" }));

        for (key, value) in &fields {
            assert_eq!(&from_firestore_value(&wire[key]), value);
        }
    }

    #[test]
    fn test_integer_value_accepts_string_and_number() {
        assert_eq!(from_firestore_value(&json!({ "integerValue": "42" })), json!(42));
        assert_eq!(from_firestore_value(&json!({ "integerValue": 42 })), json!(42));
    }

    #[test]
    fn test_unknown_value_kind_becomes_null() {
        let value = json!({ "mapValue": { "fields": {} } });
        assert_eq!(from_firestore_value(&value), Value::Null);
    }
}
