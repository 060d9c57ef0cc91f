use serde_json::{json, Map, Value};

use firelist::store::{Document, MemoryStore, StoreError, TodoStore};

fn doc(id: &str, owner: &str, created_at: i64) -> Document {
    let mut fields = Map::new();
    fields.insert("title".to_string(), json!(format!("todo {id}")));
    fields.insert("ownerId".to_string(), json!(owner));
    fields.insert("createdAt".to_string(), json!(created_at));
    Document::new(id, fields)
}

#[tokio::test]
async fn test_query_filters_by_owner_and_orders_newest_first() {
    let store = MemoryStore::with_documents(vec![
        doc("a", "user-1", 100),
        doc("b", "user-2", 300),
        doc("c", "user-1", 200),
    ]);

    let result = store.query_by_owner("user-1").await.unwrap();
    let ids: Vec<&str> = result.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[tokio::test]
async fn test_set_document_inserts_then_replaces() {
    let store = MemoryStore::new();

    let mut fields = Map::new();
    fields.insert("title".to_string(), json!("first"));
    store.set_document("x", fields).await.unwrap();

    let mut replacement = Map::new();
    replacement.insert("title".to_string(), json!("second"));
    store.set_document("x", replacement).await.unwrap();

    let docs = store.documents();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].fields["title"], json!("second"));
    // Full replace: fields absent from the new map are gone
    assert_eq!(docs[0].fields.len(), 1);
}

#[tokio::test]
async fn test_update_document_merges_patch_only() {
    let store = MemoryStore::with_documents(vec![doc("a", "user-1", 100)]);

    let mut patch = Map::new();
    patch.insert("title".to_string(), json!("patched"));
    store.update_document("a", patch).await.unwrap();

    let fields = &store.documents()[0].fields;
    assert_eq!(fields["title"], json!("patched"));
    // Untouched fields survive a field-subset update
    assert_eq!(fields["ownerId"], json!("user-1"));
    assert_eq!(fields["createdAt"], json!(100));
}

#[tokio::test]
async fn test_update_missing_document_is_not_found() {
    let store = MemoryStore::new();
    let result = store.update_document("ghost", Map::new()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_document_is_idempotent() {
    let store = MemoryStore::with_documents(vec![doc("a", "user-1", 100)]);

    store.delete_document("a").await.unwrap();
    assert!(store.documents().is_empty());

    // Deleting an absent document is not an error
    store.delete_document("a").await.unwrap();
}

#[tokio::test]
async fn test_delete_documents_removes_listed_batch() {
    let store = MemoryStore::with_documents(vec![
        doc("a", "user-1", 100),
        doc("b", "user-1", 200),
        doc("c", "user-1", 300),
    ]);

    store
        .delete_documents(&["a".to_string(), "c".to_string()])
        .await
        .unwrap();

    let docs = store.documents();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "b");
}

#[tokio::test]
async fn test_failing_mode_rejects_without_mutation() {
    let store = MemoryStore::with_documents(vec![doc("a", "user-1", 100)]);
    store.set_fail_requests(true);

    assert!(store.query_by_owner("user-1").await.is_err());
    assert!(store.delete_documents(&["a".to_string()]).await.is_err());
    assert!(store.delete_document("a").await.is_err());

    store.set_fail_requests(false);
    assert_eq!(store.documents().len(), 1);
}

#[tokio::test]
async fn test_operations_are_recorded_in_order() {
    let store = MemoryStore::new();

    let mut fields = Map::new();
    fields.insert("title".to_string(), json!("x"));
    store.set_document("a", fields).await.unwrap();
    store.delete_document("a").await.unwrap();

    assert_eq!(store.operations(), vec!["set_document", "delete_document"]);
}
