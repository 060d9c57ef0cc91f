use firelist::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.firebase.project_id, "");
    assert_eq!(config.firebase.database_id, "(default)");
    assert_eq!(config.firebase.collection, "todos");
    assert_eq!(config.firebase.api_key_env, "FIREBASE_API_KEY");
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty collection should fail
    config.firebase.collection = String::new();
    assert!(config.validate().is_err());

    // A collection path instead of a collection id should fail
    config.firebase.collection = "users/abc/todos".to_string();
    assert!(config.validate().is_err());

    // Reset and test empty api_key_env
    config.firebase.collection = "todos".to_string();
    config.firebase.api_key_env = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("collection = \"todos\""));
    assert!(toml_str.contains("api_key_env = \"FIREBASE_API_KEY\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[firebase]
project_id = "my-todo-app"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.firebase.project_id, "my-todo-app");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.firebase.database_id, "(default)"); // default value
    assert_eq!(config.firebase.collection, "todos"); // default value
    assert_eq!(config.firebase.api_key_env, "FIREBASE_API_KEY"); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.firebase.project_id, default_config.firebase.project_id);
    assert_eq!(config.firebase.collection, default_config.firebase.collection);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_api_key_reads_configured_env_var() {
    let mut config = Config::default();
    config.firebase.api_key_env = "FIRELIST_TEST_API_KEY".to_string();

    std::env::remove_var("FIRELIST_TEST_API_KEY");
    assert!(config.api_key().is_err());

    std::env::set_var("FIRELIST_TEST_API_KEY", "key-123");
    assert_eq!(config.api_key().unwrap(), "key-123");
    std::env::remove_var("FIRELIST_TEST_API_KEY");
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("firelist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Firelist Configuration File"));
    assert!(content.contains("collection = \"todos\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
