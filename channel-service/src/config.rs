/// Configuration management for channel-service
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Pagination defaults shared by every listing
    pub pagination: PaginationConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
}

/// Pagination defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not ask for one
    #[serde(default = "default_page_limit")]
    pub default_limit: u32,
    /// Optional hard cap on the requested page size. The public API has
    /// historically accepted any limit; deployments that want a ceiling
    /// set PAGE_MAX_LIMIT.
    #[serde(default)]
    pub max_limit: Option<u32>,
}

fn default_page_limit() -> u32 {
    10
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_page_limit(),
            max_limit: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        };

        let pagination = PaginationConfig {
            default_limit: match std::env::var("PAGE_DEFAULT_LIMIT") {
                Ok(raw) => raw
                    .parse()
                    .context("PAGE_DEFAULT_LIMIT must be a positive integer")?,
                Err(_) => default_page_limit(),
            },
            max_limit: match std::env::var("PAGE_MAX_LIMIT") {
                Ok(raw) => Some(
                    raw.parse()
                        .context("PAGE_MAX_LIMIT must be a positive integer")?,
                ),
                Err(_) => None,
            },
        };

        Ok(Self { app, pagination })
    }
}
