//! Bot platform interfaces
//!
//! Platform-agnostic seam between the screener pipeline and whatever chat
//! transport hosts it

pub mod formatter;
pub mod interface;
pub mod session;

pub use formatter::{Formatter, FormatterFactory};
pub use interface::{BotInterface, BotPlatform, BotResponse, ResponseType, SuggestedAction};
pub use session::{FilterStore, InMemoryFilterStore, SessionManager};
