//! Response formatting utilities

use crate::bot::Command;
use crate::interface::BotPlatform;

pub trait Formatter: Send + Sync {
    fn platform(&self) -> BotPlatform;
    fn format_results(&self, body: &str) -> String;
    fn format_error(&self, error: &str) -> String;
    fn format_help(&self) -> String;
}

pub struct CliFormatter;

impl Formatter for CliFormatter {
    fn platform(&self) -> BotPlatform {
        BotPlatform::CLI
    }

    fn format_results(&self, body: &str) -> String {
        body.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("❌ Error: {error}")
    }

    fn format_help(&self) -> String {
        Command::help_text().to_string()
    }
}

pub struct TelegramFormatter;

impl Formatter for TelegramFormatter {
    fn platform(&self) -> BotPlatform {
        BotPlatform::Telegram
    }

    fn format_results(&self, body: &str) -> String {
        format!("```\n{body}\n```")
    }

    fn format_error(&self, error: &str) -> String {
        format!("❌ *Error:* {error}")
    }

    fn format_help(&self) -> String {
        format!("*Bond Screener Bot*\n{}", Command::help_text())
    }
}

pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(platform: BotPlatform) -> Box<dyn Formatter> {
        match platform {
            BotPlatform::Telegram => Box::new(TelegramFormatter),
            _ => Box::new(CliFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_picks_platform() {
        assert_eq!(
            FormatterFactory::create(BotPlatform::Telegram).platform(),
            BotPlatform::Telegram
        );
        assert_eq!(
            FormatterFactory::create(BotPlatform::CLI).platform(),
            BotPlatform::CLI
        );
    }

    #[test]
    fn test_cli_error_format() {
        let formatter = CliFormatter;
        assert_eq!(formatter.format_error("boom"), "❌ Error: boom");
    }
}
