//! Bond Screener Bot CLI
//!
//! An interactive command-line interface for the bond screener.
//!
//! # Usage
//!
//! ```bash
//! # Optional overrides
//! export ISS_BASE_URL="https://iss.moex.com/iss"
//! export RUST_LOG="info,bond_screener=debug"
//!
//! # Run the bot
//! cargo run --bin bond-bot -p bond-screener
//! ```

use bond_screener::bot::{BondBot, BotConfig};
use std::io::{self, BufRead, Write};

fn print_banner() {
    println!(
        r"
╔══════════════════════════════════════════════════════════════╗
║                      Bond Screener Bot                       ║
║                                                              ║
║  Commands:                                                   ║
║    /find <ticker>        - Look up one bond                  ║
║    /set <param> <value>  - Set a search filter               ║
║    /search               - Run a filtered search             ║
║    /filters              - Show saved filters                ║
║    /help                 - Show help                         ║
║    /exit                 - Exit                              ║
║                                                              ║
║  Or just type a ticker:                                      ║
║    SU26230RMFS1                                              ║
╚══════════════════════════════════════════════════════════════╝
"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bond_utils::init_tracing();

    let app = bond_utils::AppConfig::default();
    tracing::info!(app = %app.app_name, env = %app.environment, "starting");

    print_banner();

    let config = BotConfig::from_env()?;
    let bot = BondBot::new(config)?;

    println!("{}\n", bot.welcome());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        // Print prompt
        print!("{}", bot.prompt());
        stdout.flush()?;

        // Read input
        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // Process input
        match bot.process_input("cli", input).await {
            Ok(response) => {
                println!("{}\n", response.content);
            }
            Err(e) => {
                // Check if it's an exit request
                if e.to_string() == "exit" {
                    println!("Goodbye!");
                    break;
                }
                eprintln!("Error: {e}\n");
            }
        }
    }

    Ok(())
}
