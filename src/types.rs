//! Core types and structures for gmail-dot-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::config_error;
use crate::error::Result;

/// Smallest number of variants a request may ask for
pub const MIN_VARIATIONS: usize = 1;

/// Largest number of variants a request may ask for
pub const MAX_VARIATIONS: usize = 1000;

/// Default plaintext export file name
pub const DEFAULT_EXPORT_FILE: &str = "gmail-variations.txt";

/// Default domain accepted by the validator
pub const DEFAULT_DOMAIN: &str = "gmail.com";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a stored theme value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// A single generation request, already clamped by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub username: String,
    pub requested_count: usize,
}

impl GenerationRequest {
    pub fn new(username: impl Into<String>, requested_count: usize) -> Self {
        Self {
            username: username.into(),
            requested_count,
        }
    }

    /// Run the pattern generator for this request
    pub fn generate(&self) -> Vec<String> {
        crate::pattern::generate_variants(&self.username, self.requested_count)
    }
}

/// Record of one generation run, suitable for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub address: String,
    pub domain: String,
    pub requested_count: usize,
    pub addresses: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn new(address: impl Into<String>, domain: impl Into<String>, requested_count: usize, addresses: Vec<String>) -> Self {
        Self {
            address: address.into(),
            domain: domain.into(),
            requested_count,
            addresses,
            generated_at: Utc::now(),
        }
    }

    /// Number of generated addresses
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub max_variations: usize,
    pub export_path: PathBuf,
    pub prefs_path: PathBuf,
    pub domains: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_variations: MAX_VARIATIONS,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            prefs_path: PathBuf::from("output/preferences.json"),
            domains: vec![DEFAULT_DOMAIN.to_string()],
        }
    }
}

impl AppConfig {
    /// Build configuration from `DOT_FORGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("DOT_FORGE_MAX_VARIATIONS") {
            config.max_variations = match raw.trim().parse::<usize>() {
                Ok(max) if max >= MIN_VARIATIONS => max,
                _ => {
                    return Err(config_error!(
                        "DOT_FORGE_MAX_VARIATIONS must be a positive integer, got '{}'",
                        raw
                    ))
                }
            };
        }

        if let Ok(path) = env::var("DOT_FORGE_EXPORT_PATH") {
            if !path.trim().is_empty() {
                config.export_path = PathBuf::from(path);
            }
        }

        if let Ok(path) = env::var("DOT_FORGE_PREFS_PATH") {
            if !path.trim().is_empty() {
                config.prefs_path = PathBuf::from(path);
            }
        }

        if let Ok(raw) = env::var("DOT_FORGE_DOMAINS") {
            let domains: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !domains.is_empty() {
                config.domains = domains;
            }
        }

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }
}
