//! Bot interface trait and core abstractions
//!
//! Defines the platform-agnostic surface all bot implementations share

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Platform identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotPlatform {
    /// Command-line interface
    CLI,

    /// Telegram bot
    Telegram,

    /// Custom platform
    Custom,
}

/// Bot response
///
/// The content is ready-to-send display text; `actions` carries follow-up
/// command suggestions the hosting chat layer may render as a keyboard.
/// This core supplies labels and command strings only, never the menu
/// structure itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotResponse {
    /// Response content
    pub content: String,

    /// Response type
    pub response_type: ResponseType,

    /// Suggested follow-up commands
    pub actions: Vec<SuggestedAction>,
}

/// Type of bot response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    /// Plain text
    Text,

    /// Formatted text (Markdown, HTML, etc.)
    Formatted,

    /// Error message
    Error,
}

/// Suggested follow-up command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedAction {
    /// Button label
    pub label: String,

    /// Command to run when chosen
    pub command: String,
}

impl BotResponse {
    /// Create a simple text response
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Text,
            actions: Vec::new(),
        }
    }

    /// Create a formatted response
    pub fn formatted(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Formatted,
            actions: Vec::new(),
        }
    }

    /// Create an error response
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Error,
            actions: Vec::new(),
        }
    }

    /// Add a suggested follow-up command
    pub fn with_action(mut self, label: impl Into<String>, command: impl Into<String>) -> Self {
        self.actions.push(SuggestedAction {
            label: label.into(),
            command: command.into(),
        });
        self
    }
}

/// Main bot interface trait
///
/// All platform implementations must implement this trait
#[async_trait]
pub trait BotInterface: Send + Sync {
    /// Get the platform identifier
    fn platform(&self) -> BotPlatform;

    /// Handle an incoming message from a user
    async fn on_message(&self, user_id: &str, message: &str) -> Result<BotResponse>;
}

impl std::fmt::Display for BotPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotPlatform::CLI => write!(f, "CLI"),
            BotPlatform::Telegram => write!(f, "Telegram"),
            BotPlatform::Custom => write!(f, "Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_response_creation() {
        let response = BotResponse::text("Hello, world!");
        assert_eq!(response.response_type, ResponseType::Text);
        assert_eq!(response.content, "Hello, world!");
    }

    #[test]
    fn test_bot_response_actions() {
        let response = BotResponse::formatted("results")
            .with_action("🔎 Search", "/search")
            .with_action("⚙️ Filters", "/filters");

        assert_eq!(response.actions.len(), 2);
        assert_eq!(response.actions[0].label, "🔎 Search");
        assert_eq!(response.actions[1].command, "/filters");
    }
}
