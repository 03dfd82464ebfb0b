//! Command parsing for the bond screener bot

use crate::error::{Result, ScreenerError};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Greet the user and offer the main actions
    Start,
    /// Show help
    Help,
    /// Look up a single bond by ticker
    Find { ticker: String },
    /// Run a search with the user's saved filters
    Search,
    /// Show the user's saved filters
    Filters,
    /// Set one filter parameter
    Set { param: String, value: String },
    /// Clear all saved filters
    Reset,
    /// Exit the bot
    Exit,
}

impl Command {
    /// Parse a command from user input.
    ///
    /// Bare text without a leading `/` is treated as a ticker lookup.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ScreenerError::CommandError("Empty input".to_string()));
        }

        if !input.starts_with('/') {
            let mut words = input.split_whitespace();
            let ticker = words
                .next()
                .ok_or_else(|| ScreenerError::CommandError("Empty input".to_string()))?;
            if words.next().is_some() {
                return Err(ScreenerError::CommandError(
                    "A ticker is a single word, e.g. SU26230RMFS1".to_string(),
                ));
            }
            return Ok(Command::Find {
                ticker: ticker.to_uppercase(),
            });
        }

        let parts: Vec<&str> = input[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Err(ScreenerError::CommandError("Empty command".to_string()));
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "start" => Ok(Command::Start),
            "help" | "h" | "?" => Ok(Command::Help),
            "find" | "f" | "ticker" => {
                let ticker = args.first().ok_or_else(|| {
                    ScreenerError::CommandError("Missing ticker for find command".to_string())
                })?;
                Ok(Command::Find {
                    ticker: ticker.to_uppercase(),
                })
            }
            "search" | "s" => Ok(Command::Search),
            "filters" | "settings" => Ok(Command::Filters),
            "set" => {
                if args.len() < 2 {
                    return Err(ScreenerError::CommandError(
                        "Usage: /set <param> <value>".to_string(),
                    ));
                }
                Ok(Command::Set {
                    param: args[0].to_lowercase(),
                    value: args[1].to_string(),
                })
            }
            "reset" => Ok(Command::Reset),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            _ => Err(ScreenerError::CommandError(format!(
                "Unknown command: {cmd}"
            ))),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r"
Bond Screener Bot Commands
==========================

Lookup:
  /find <ticker>        Show one bond by its ticker
  <ticker>              Same as /find

Filtered search:
  /search               Run a search with your saved filters
  /filters              Show your saved filters
  /set <param> <value>  Set one filter parameter
  /reset                Clear all filters

Filter parameters for /set:
  rating <AAA|AA|...>   Credit rating
  mincoupon <percent>   Minimum coupon rate
  maxcoupon <percent>   Maximum coupon rate
  minyield <percent>    Minimum effective yield
  maxyield <percent>    Maximum effective yield
  mindur <days>         Minimum duration
  maxdur <days>         Maximum duration
  years <n>             Maturity within n years

Other:
  /help                 Show this help
  /exit                 Exit

Active bonds only; matured issues are always excluded from searches.
"
    }

    /// Get a short description of the command
    pub fn description(&self) -> &'static str {
        match self {
            Command::Start => "Greeting and main actions",
            Command::Help => "Show help",
            Command::Find { .. } => "Single bond lookup",
            Command::Search => "Filtered bond search",
            Command::Filters => "Show saved filters",
            Command::Set { .. } => "Set a filter parameter",
            Command::Reset => "Clear saved filters",
            Command::Exit => "Exit the bot",
        }
    }
}
