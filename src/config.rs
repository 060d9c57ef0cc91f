//! Configuration management for firelist
//!
//! This module handles loading, parsing, and validation of configuration
//! files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_API_KEY_ENV, DEFAULT_COLLECTION, DEFAULT_DATABASE_ID,
};
use crate::utils::datetime::TIMESTAMP_FORMAT;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub firebase: FirebaseConfig,
    pub logging: LoggingConfig,
}

/// Firebase project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    /// Firebase project identifier
    pub project_id: String,
    /// Firestore database identifier
    pub database_id: String,
    /// Collection holding todo documents
    pub collection: String,
    /// Environment variable holding the web API key
    pub api_key_env: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable the in-memory operation log on the sync service
    pub enabled: bool,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("firelist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("firelist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.firebase.database_id.is_empty() {
            anyhow::bail!("firebase.database_id cannot be empty");
        }
        if self.firebase.collection.is_empty() {
            anyhow::bail!("firebase.collection cannot be empty");
        }
        if self.firebase.collection.contains('/') {
            anyhow::bail!(
                "firebase.collection must be a single collection id, got '{}'",
                self.firebase.collection
            );
        }
        if self.firebase.api_key_env.is_empty() {
            anyhow::bail!("firebase.api_key_env cannot be empty");
        }
        // project_id may be empty in a default config; client constructors
        // require it when actually connecting.

        Ok(())
    }

    /// Read the web API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.firebase.api_key_env).with_context(|| {
            format!(
                "Environment variable '{}' not set",
                self.firebase.api_key_env
            )
        })
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Firelist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(TIMESTAMP_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("firelist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
