//! Bond screener over the MOEX ISS public API
//!
//! This crate provides a conversational bond screener: chat-style commands
//! are translated into REST queries against the exchange's public
//! information/statistics service (ISS), and the columnar results come
//! back as human-readable text. It includes:
//!
//! - Query building from user filter criteria (rating, coupon, yield,
//!   duration, maturity window)
//! - Normalization of ISS columnar payloads into uniform bond records,
//!   with secid-keyed merging of market-data and yield tables
//! - A conjunction filter engine for the criteria the provider cannot
//!   filter server-side
//! - Fixed-layout text rendering with explicit placeholders for missing
//!   fields
//! - A platform-agnostic bot layer with per-user saved filters
//!
//! # Architecture
//!
//! User input flows through [`bot::BondBot`], which parses a
//! [`bot::Command`], drives the [`api::BondDataSource`] (live
//! implementation: [`api::IssClient`]), applies [`filter`], and renders
//! with [`format`]. Fetch failures never cross the bot boundary as
//! errors — they are logged and become a generic user-facing message.
//!
//! # Example
//!
//! ```rust,ignore
//! use bond_screener::bot::{BondBot, BotConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = BondBot::new(BotConfig::from_env()?)?;
//!
//!     let reply = bot.process_input("cli", "/set mincoupon 8").await?;
//!     println!("{}", reply.content);
//!
//!     let reply = bot.process_input("cli", "/search").await?;
//!     println!("{}", reply.content);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod interface;
pub mod model;
pub mod normalize;

// Re-export main types for convenience
pub use api::{BondDataSource, IssClient};
pub use config::ScreenerConfig;
pub use error::{Result, ScreenerError};
pub use model::{BondRecord, FilterCriteria};
