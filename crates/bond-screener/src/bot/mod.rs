//! Bond Screener Bot
//!
//! This module provides the conversational interface over the bond
//! query/filter/format pipeline.
//!
//! # Features
//!
//! - **Ticker lookup**: `/find SU26230RMFS1` or just the bare ticker
//! - **Filtered search**: criteria collected with `/set`, run with `/search`
//! - **Saved filters**: criteria persist per user for the process lifetime
//!
//! # Example
//!
//! ```rust,ignore
//! use bond_screener::bot::{BondBot, BotConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = BondBot::new(BotConfig::from_env()?)?;
//!     let reply = bot.process_input("cli", "/search").await?;
//!     println!("{}", reply.content);
//!     Ok(())
//! }
//! ```

pub mod commands;

use crate::api::{BondDataSource, IssClient};
use crate::config::ScreenerConfig;
use crate::error::{Result, ScreenerError};
use crate::format;
use crate::interface::{
    BotInterface, BotPlatform, BotResponse, Formatter, FormatterFactory, SessionManager,
};
use crate::model::FilterCriteria;
use async_trait::async_trait;
use std::sync::Arc;

pub use commands::Command;

/// Configuration for the bond bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Screener pipeline configuration
    pub screener_config: ScreenerConfig,
    /// Chat platform credential, owned by process bootstrap; the REPL
    /// runs without one
    pub token: Option<String>,
    /// Welcome message
    pub welcome_message: String,
    /// Prompt prefix
    pub prompt: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            screener_config: ScreenerConfig::default(),
            token: None,
            welcome_message: "📈 Bond Screener — /help for commands".to_string(),
            prompt: ">>> ".to_string(),
        }
    }
}

impl BotConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let screener_config = ScreenerConfig::default().with_env_base_url();
        screener_config.validate()?;

        Ok(Self {
            screener_config,
            token: std::env::var("BOND_BOT_TOKEN").ok(),
            ..Default::default()
        })
    }

    /// Create a builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }
}

/// Builder for BotConfig
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    screener_config: Option<ScreenerConfig>,
    token: Option<String>,
    welcome_message: Option<String>,
    prompt: Option<String>,
}

impl BotConfigBuilder {
    /// Set screener config
    pub fn screener_config(mut self, config: ScreenerConfig) -> Self {
        self.screener_config = Some(config);
        self
    }

    /// Set the chat platform credential
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set welcome message
    pub fn welcome_message(mut self, msg: impl Into<String>) -> Self {
        self.welcome_message = Some(msg.into());
        self
    }

    /// Set prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Build the config
    pub fn build(self) -> BotConfig {
        let defaults = BotConfig::default();
        BotConfig {
            screener_config: self.screener_config.unwrap_or(defaults.screener_config),
            token: self.token,
            welcome_message: self.welcome_message.unwrap_or(defaults.welcome_message),
            prompt: self.prompt.unwrap_or(defaults.prompt),
        }
    }
}

/// Bond Screener Bot
///
/// Dispatches parsed commands over the data source, filter engine,
/// formatter and per-user filter store. Fetch failures never escape as
/// errors: they are logged and rendered as a generic user-facing message,
/// and the bot keeps serving subsequent requests.
pub struct BondBot {
    /// Where bond data comes from
    source: Arc<dyn BondDataSource>,
    /// Per-user saved filter criteria
    sessions: SessionManager,
    /// Platform-specific presentation
    formatter: Box<dyn Formatter>,
    /// Bot configuration
    config: BotConfig,
}

impl BondBot {
    /// Create a bot backed by the live ISS API
    pub fn new(config: BotConfig) -> Result<Self> {
        let source = Arc::new(IssClient::new(config.screener_config.clone())?);
        Ok(Self::with_source(source, config))
    }

    /// Create a bot over any data source (used by tests and embedders)
    pub fn with_source(source: Arc<dyn BondDataSource>, config: BotConfig) -> Self {
        Self {
            source,
            sessions: SessionManager::new(),
            formatter: FormatterFactory::create(BotPlatform::CLI),
            config,
        }
    }

    /// Switch the presentation to another platform
    pub fn with_platform(mut self, platform: BotPlatform) -> Self {
        self.formatter = FormatterFactory::create(platform);
        self
    }

    /// Get the welcome message
    pub fn welcome(&self) -> &str {
        &self.config.welcome_message
    }

    /// Get the prompt
    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    /// Process user input and return a response.
    ///
    /// Unparseable input yields a re-prompt error response, not an `Err`;
    /// the only `Err` this returns is the exit signal.
    pub async fn process_input(&self, user_id: &str, input: &str) -> Result<BotResponse> {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(e) => {
                return Ok(BotResponse::error(
                    self.formatter.format_error(&e.to_string()),
                ));
            }
        };
        self.execute_command(user_id, command).await
    }

    /// Execute a parsed command
    pub async fn execute_command(&self, user_id: &str, command: Command) -> Result<BotResponse> {
        match command {
            Command::Start => Ok(BotResponse::formatted(self.config.welcome_message.clone())
                .with_action("🔎 Find by ticker", "/find")
                .with_action("⚙️ Filters", "/filters")
                .with_action("✅ Search", "/search")),
            Command::Help => Ok(BotResponse::text(self.formatter.format_help())),
            Command::Find { ticker } => Ok(self.find_bond(&ticker).await),
            Command::Search => Ok(self.run_search(user_id).await),
            Command::Filters => {
                let criteria = self.sessions.criteria(user_id);
                Ok(BotResponse::text(format::format_criteria(&criteria))
                    .with_action("✅ Search", "/search")
                    .with_action("🔄 Reset", "/reset"))
            }
            Command::Set { param, value } => Ok(self.apply_setting(user_id, &param, &value)),
            Command::Reset => {
                self.sessions.reset(user_id);
                Ok(BotResponse::text("✅ All filters reset"))
            }
            Command::Exit => Err(ScreenerError::Other("exit".to_string())),
        }
    }

    async fn find_bond(&self, ticker: &str) -> BotResponse {
        match self.source.bond_by_ticker(ticker).await {
            Ok(Some(record)) => {
                let mut text = format::format_bond(&record);
                if !record.has_rating() {
                    text.push_str("\n\n");
                    text.push_str(format::RATING_UNAVAILABLE);
                }
                BotResponse::formatted(self.formatter.format_results(&text))
            }
            Ok(None) => BotResponse::text(format!("❌ Bond {ticker} not found")),
            Err(e) => {
                tracing::error!("ticker lookup failed for {ticker}: {e}");
                BotResponse::error(
                    self.formatter
                        .format_error("bond lookup failed, please try again later"),
                )
            }
        }
    }

    async fn run_search(&self, user_id: &str) -> BotResponse {
        let criteria = self.sessions.criteria(user_id);
        if criteria.is_empty() {
            return BotResponse::text(
                "⚙️ No filters configured yet. Use /set to add one, then /search.",
            )
            .with_action("⚙️ Filters", "/filters");
        }

        // Standing defaults go on a copy; the user's saved criteria keep
        // only what the user set.
        let effective = criteria.with_search_defaults();

        match self.source.search_bonds(&effective).await {
            Ok(matches) => {
                let body = format::format_bond_list(
                    &matches,
                    self.config.screener_config.display_limit,
                );
                BotResponse::formatted(self.formatter.format_results(&body))
                    .with_action("⚙️ Filters", "/filters")
            }
            Err(e) => {
                tracing::error!("bond search failed: {e}");
                BotResponse::error(
                    self.formatter
                        .format_error("bond search failed, please try again later"),
                )
            }
        }
    }

    fn apply_setting(&self, user_id: &str, param: &str, value: &str) -> BotResponse {
        let mut criteria = self.sessions.criteria(user_id);

        let confirmation = match set_criterion(&mut criteria, param, value) {
            Ok(text) => text,
            Err(e) => {
                return BotResponse::error(self.formatter.format_error(&e.to_string()));
            }
        };

        if let Err(e) = self.sessions.replace(user_id, criteria) {
            tracing::error!("failed to save filters for {user_id}: {e}");
            return BotResponse::error(self.formatter.format_error("could not save filters"));
        }

        BotResponse::text(confirmation)
    }
}

#[async_trait]
impl BotInterface for BondBot {
    fn platform(&self) -> BotPlatform {
        self.formatter.platform()
    }

    async fn on_message(&self, user_id: &str, message: &str) -> Result<BotResponse> {
        self.process_input(user_id, message).await
    }
}

/// Apply one `/set` parameter to a criteria value.
///
/// The value is validated before anything is mutated, so a rejected input
/// leaves the criteria exactly as they were.
fn set_criterion(criteria: &mut FilterCriteria, param: &str, value: &str) -> Result<String> {
    fn number(value: &str) -> Result<f64> {
        value.trim().parse().map_err(|_| {
            ScreenerError::CommandError("Please enter a valid number".to_string())
        })
    }

    match param {
        "rating" => {
            let rating = value.trim().to_uppercase();
            let text = format!("✅ Credit rating set to {rating}");
            criteria.credit_rating = Some(rating);
            Ok(text)
        }
        "mincoupon" => {
            let v = number(value)?;
            criteria.min_coupon_percent = Some(v);
            Ok(format!("✅ Min coupon set to {v}%"))
        }
        "maxcoupon" => {
            let v = number(value)?;
            criteria.max_coupon_percent = Some(v);
            Ok(format!("✅ Max coupon set to {v}%"))
        }
        "minyield" => {
            let v = number(value)?;
            criteria.min_effective_yield = Some(v);
            Ok(format!("✅ Min effective yield set to {v}%"))
        }
        "maxyield" => {
            let v = number(value)?;
            criteria.max_effective_yield = Some(v);
            Ok(format!("✅ Max effective yield set to {v}%"))
        }
        "mindur" => {
            let v = number(value)?;
            criteria.min_duration = Some(v);
            Ok(format!("✅ Min duration set to {v} days"))
        }
        "maxdur" => {
            let v = number(value)?;
            criteria.max_duration = Some(v);
            Ok(format!("✅ Max duration set to {v} days"))
        }
        "years" => {
            let v: u32 = value.trim().parse().map_err(|_| {
                ScreenerError::CommandError(
                    "Please enter a whole number of years".to_string(),
                )
            })?;
            criteria.years_to_maturity = Some(v);
            Ok(format!("✅ Years to maturity set to {v}"))
        }
        other => Err(ScreenerError::CommandError(format!(
            "Unknown filter parameter: {other}"
        ))),
    }
}
