//! Constants used throughout the library
//!
//! This module centralizes endpoint URLs, document field names, and default
//! configuration values to improve maintainability and consistency.

// Remote endpoints
/// Base URL of the Firestore REST API
pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
/// Base URL of the Identity Toolkit (Firebase Auth) REST API
pub const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

// Configuration defaults
/// Default Firestore database identifier
pub const DEFAULT_DATABASE_ID: &str = "(default)";
/// Default collection holding todo documents
pub const DEFAULT_COLLECTION: &str = "todos";
/// Default environment variable holding the Firebase web API key
pub const DEFAULT_API_KEY_ENV: &str = "FIREBASE_API_KEY";

// Document field names
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_IS_COMPLETED: &str = "isCompleted";
pub const FIELD_PRIORITY: &str = "priority";
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const FIELD_UPDATED_AT: &str = "updatedAt";
pub const FIELD_OWNER_ID: &str = "ownerId";

// Error messages
pub const ERROR_NOT_AUTHENTICATED: &str = "User not authenticated";

// Priority bounds
/// Lowest valid persisted priority value
pub const PRIORITY_MIN: i64 = 1;
/// Highest valid persisted priority value
pub const PRIORITY_MAX: i64 = 3;

// UI message prefixes used in generated files
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
