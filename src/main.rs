//! Address Book - Main entry point
//!
//! Runs the interactive prompt over the address book stored at the
//! configured path. The book is saved when the session ends.

use address_book::commands::{self, Response, HELP_TEXT};
use address_book::config::log_level_from_env;
use address_book::{Config, ContactService, FileStorage};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout belongs to the prompt
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level_from_env()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => {
            info!(log_level = %config.log_level, "Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(path = %config.book_path.display(), "Opening address book");

    let storage = FileStorage::new(&config.book_path);
    let mut service = ContactService::open(Box::new(storage), &config)?;

    println!("{}", HELP_TEXT);
    run_prompt(&mut service)?;

    if let Err(e) = service.save() {
        error!("Failed to save address book: {}", e);
        return Err(e.into());
    }

    info!("Address book session complete");
    Ok(())
}

/// Read commands until exit or end of input.
fn run_prompt(service: &mut ContactService) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("Enter a command >>> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match commands::handle(service, command) {
            Ok(Response::Text(text)) => println!("{}", text),
            Ok(Response::Pages(pages)) => {
                for page in pages {
                    println!("{}", page.join("\n"));
                    print!("Press Enter to continue...");
                    io::stdout().flush()?;
                    let mut pause = String::new();
                    if input.read_line(&mut pause)? == 0 {
                        break;
                    }
                }
            }
            Ok(Response::Exit(farewell)) => {
                println!("{}", farewell);
                return Ok(());
            }
            Err(e) => println!("{}", e),
        }
    }
}
