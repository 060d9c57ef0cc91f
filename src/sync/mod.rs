//! Synchronization service for the todo collection.
//!
//! This module provides the [`TodoSyncService`] struct, the single point of
//! truth reconciling the observable [`TodoListState`] with the remote
//! per-user document collection. Every operation validates its input,
//! performs one remote round trip, and mirrors the result into the state
//! store only after the remote call succeeds, so a remote failure never
//! leaves local state ahead of the backend.
//!
//! Failure channel: mutating operations report failures exclusively through
//! their return value; the state store's shared `error_message` slot is
//! written only by [`TodoSyncService::load`] and
//! [`TodoSyncService::refresh`].

pub mod todos;

use std::sync::Arc;

use log::{error, info, warn};

use crate::auth::{AuthProvider, AuthUser};
use crate::config::Config;
use crate::constants::ERROR_NOT_AUTHENTICATED;
use crate::logger::Logger;
use crate::model::TodoItem;
use crate::state::{TodoListSnapshot, TodoListState};
use crate::store::{Document, StoreError, TodoStore};

/// Typed failure of a sync operation.
///
/// Local validation failures (`InvalidInput`, `NotFound`) never touch the
/// network; `Remote` preserves the underlying store failure for display.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Remote operation failed: {0}")]
    Remote(#[from] StoreError),
}

/// Service that reconciles the in-memory todo list with the remote store.
///
/// One instance is constructed per authenticated session and passed
/// explicitly to whoever needs it; the service owns the state store and is
/// the only writer to it. Operations are asynchronous, suspend for exactly
/// one remote round trip, and return typed results instead of panicking.
///
/// # Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use firelist::auth::{AuthUser, SessionAuth};
/// use firelist::config::Config;
/// use firelist::model::Priority;
/// use firelist::store::MemoryStore;
/// use firelist::sync::TodoSyncService;
///
/// # async fn example() -> Result<(), firelist::sync::SyncError> {
/// let auth = Arc::new(SessionAuth::signed_in(AuthUser {
///     user_id: "user-1".into(),
///     email: "user@example.com".into(),
///     id_token: String::new(),
///     refresh_token: String::new(),
/// }));
/// let service = TodoSyncService::new(Arc::new(MemoryStore::new()), auth, &Config::default());
///
/// service.load().await?;
/// service.add_todo("Buy milk", "", Priority::Medium).await?;
/// assert_eq!(service.state().total_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TodoSyncService {
    store: Arc<dyn TodoStore>,
    auth: Arc<dyn AuthProvider>,
    state: Arc<TodoListState>,
    logger: Option<Logger>,
}

impl TodoSyncService {
    /// Creates a new service over the given store and auth collaborator.
    ///
    /// The in-memory operation log is attached when `config.logging.enabled`
    /// is set.
    pub fn new(store: Arc<dyn TodoStore>, auth: Arc<dyn AuthProvider>, config: &Config) -> Self {
        Self {
            store,
            auth,
            state: Arc::new(TodoListState::new()),
            logger: config.logging.enabled.then(Logger::new),
        }
    }

    /// The observable state store this service owns.
    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    /// Subscribe to state changes; convenience for `state().subscribe()`.
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<TodoListSnapshot> {
        self.state.subscribe()
    }

    /// The in-memory operation log, if enabled at construction.
    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    /// Which store implementation this service talks to.
    pub fn store_type(&self) -> &str {
        self.store.store_type()
    }

    pub(crate) fn current_user(&self) -> Result<AuthUser, SyncError> {
        self.auth.current_user().ok_or(SyncError::NotAuthenticated)
    }

    pub(crate) fn record(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.log(message);
        }
    }

    /// Loads the current user's todos from the remote store.
    ///
    /// Without a signed-in user this touches no network: the shared error
    /// slot is set, the store is marked initialized, and
    /// [`SyncError::NotAuthenticated`] is returned. Otherwise the item
    /// sequence is atomically replaced with the parsed query result. On
    /// query failure the sequence is left unchanged and the failure lands in
    /// `error_message` as well as the returned error.
    pub async fn load(&self) -> Result<(), SyncError> {
        let user = match self.auth.current_user() {
            Some(user) => user,
            None => {
                self.state.set_error_message(Some(ERROR_NOT_AUTHENTICATED.to_string()));
                self.state.set_initialized(true);
                return Err(SyncError::NotAuthenticated);
            }
        };

        self.state.set_loading(true);
        self.state.set_error_message(None);
        info!("🔄 Loading todos for user {}", user.user_id);

        match self.store.query_by_owner(&user.user_id).await {
            Ok(documents) => {
                let todos = parse_documents(documents, &user.user_id);
                info!("✅ Loaded {} todos", todos.len());
                self.record(&format!("Loaded {} todos", todos.len()));
                self.state.replace_todos(todos);
                self.state.set_loading(false);
                self.state.set_initialized(true);
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to load todos: {e}");
                self.record(&format!("Load failed: {e}"));
                self.state.set_loading(false);
                self.state.set_initialized(true);
                self.state.set_error_message(Some(format!("Failed to load todos: {e}")));
                Err(SyncError::Remote(e))
            }
        }
    }

    /// Forces a reload: clears the initialized flag and re-invokes
    /// [`TodoSyncService::load`].
    pub async fn refresh(&self) -> Result<(), SyncError> {
        self.state.set_initialized(false);
        self.load().await
    }
}

/// Parse raw documents into items, applying the defensive load rules.
///
/// Documents that fail to parse (blank title) or that belong to another user
/// are dropped with a warning, never surfaced as errors.
fn parse_documents(documents: Vec<Document>, owner_id: &str) -> Vec<TodoItem> {
    let mut todos = Vec::with_capacity(documents.len());
    for doc in documents {
        match TodoItem::from_fields(&doc.id, &doc.fields) {
            Some(todo) if todo.owner_id == owner_id => todos.push(todo),
            Some(todo) => {
                warn!("⚠️ Skipping todo {} owned by another user ({})", doc.id, todo.owner_id);
            }
            None => {
                warn!("⚠️ Skipping malformed todo document {}", doc.id);
            }
        }
    }
    todos
}
