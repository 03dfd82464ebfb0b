//! Configuration for bond screener operations

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default ISS endpoint for the stock/bonds market
pub const DEFAULT_BASE_URL: &str = "https://iss.moex.com/iss";

/// Configuration for bond screener operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Base URL of the ISS API
    pub base_url: String,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Board to scope full-listing fetches to (e.g. "TQCB" for corporate
    /// bonds); `None` fetches the whole bonds market
    pub board: Option<String>,

    /// Maximum number of bonds rendered per search reply
    pub display_limit: usize,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            board: Some("TQCB".to_string()),
            display_limit: 5,
        }
    }
}

impl ScreenerConfig {
    /// Create a new configuration builder
    pub fn builder() -> ScreenerConfigBuilder {
        ScreenerConfigBuilder::default()
    }

    /// Override the base URL from the `ISS_BASE_URL` environment variable
    pub fn with_env_base_url(mut self) -> Self {
        if let Ok(url) = std::env::var("ISS_BASE_URL") {
            self.base_url = url;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ScreenerError::ConfigError(
                "base_url must not be empty".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ScreenerError::ConfigError(
                "request_timeout must be greater than zero".to_string(),
            ));
        }

        if self.display_limit == 0 {
            return Err(ScreenerError::ConfigError(
                "display_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for ScreenerConfig
#[derive(Debug, Default)]
pub struct ScreenerConfigBuilder {
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    board: Option<Option<String>>,
    display_limit: Option<usize>,
}

impl ScreenerConfigBuilder {
    /// Set the ISS base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Scope listing fetches to a board
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(Some(board.into()));
        self
    }

    /// Fetch the whole bonds market instead of a single board
    pub fn all_boards(mut self) -> Self {
        self.board = Some(None);
        self
    }

    /// Set the display limit for search results
    pub fn display_limit(mut self, limit: usize) -> Self {
        self.display_limit = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ScreenerConfig> {
        let defaults = ScreenerConfig::default();

        let config = ScreenerConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            board: self.board.unwrap_or(defaults.board),
            display_limit: self.display_limit.unwrap_or(defaults.display_limit),
        };

        config.validate()?;
        Ok(config)
    }
}
