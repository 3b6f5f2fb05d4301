//! Configuration management for the cvscan service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{CvScanError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upload configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Maximum upload size in MB (enforced before extraction)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum keywords per query
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Maximum length of a single keyword in characters
    #[serde(default = "default_max_keyword_length")]
    pub max_keyword_length: usize,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_file_size() -> usize {
    10
}

fn default_max_keywords() -> usize {
    50
}

fn default_max_keyword_length() -> usize {
    200
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            max_keyword_length: default_max_keyword_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CvScanError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File resolution order:
    /// 1. CVSCAN_CONFIG env var
    /// 2. ./cvscan.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CVSCAN_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("cvscan.toml").exists() {
            Self::from_file("cvscan.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("CVSCAN_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("CVSCAN_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(max_size) = env::var("CVSCAN_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.upload.max_file_size_mb = size;
            }
        }
        if let Ok(max_keywords) = env::var("CVSCAN_MAX_KEYWORDS") {
            if let Ok(k) = max_keywords.parse() {
                self.search.max_keywords = k;
            }
        }
        if let Ok(max_len) = env::var("CVSCAN_MAX_KEYWORD_LENGTH") {
            if let Ok(len) = max_len.parse() {
                self.search.max_keyword_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.upload.max_file_size_mb == 0 {
            return Err(CvScanError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.search.max_keywords == 0 {
            return Err(CvScanError::ConfigError(
                "Max keywords must be non-zero".to_string(),
            ));
        }

        if self.search.max_keyword_length == 0 {
            return Err(CvScanError::ConfigError(
                "Max keyword length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Max upload size: {} MB", self.upload.max_file_size_mb);
        tracing::info!("  Max keywords: {}", self.search.max_keywords);
        tracing::info!(
            "  Max keyword length: {} chars",
            self.search.max_keyword_length
        );
    }
}
