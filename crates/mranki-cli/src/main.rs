//! CLI for the MRCPsych flashcard toolchain.
//!
//! `mranki check` verifies that AnkiConnect is reachable and prints what the
//! collection currently offers; `mranki setup` creates the fixed MRCPsych
//! deck hierarchy, optionally seeding two sample cards for manual
//! verification.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mranki_engine::{ClientBuilder, Engine, Error};
use tracing::{debug, warn};

/// MRCPsych deck setup and connectivity checks via AnkiConnect.
#[derive(Parser, Debug)]
#[command(name = "mranki")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// AnkiConnect port
    #[arg(long, default_value_t = 8765)]
    port: u16,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the AnkiConnect connection and list decks and note types
    Check,
    /// Create the MRCPsych deck hierarchy (safe to run repeatedly)
    Setup {
        /// Also add two sample cards for manual verification
        #[arg(long)]
        with_samples: bool,
    },
}

/// Printed whenever AnkiConnect cannot be reached.
const REMEDIATION: &str = "\
Please ensure:
  1. Anki is running
  2. AnkiConnect add-on is installed (code: 2055492159)
  3. AnkiConnect is listening on localhost:8765";

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = format!("http://{}:{}", args.host, args.port);
    debug!(anki_url = %url, "Connecting to AnkiConnect");

    let client = ClientBuilder::new().url(url).build();
    let engine = Engine::from_client(client);

    let ok = match args.command {
        Command::Check => check(&engine).await,
        Command::Setup { with_samples } => setup(&engine, with_samples).await,
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Connectivity check: print version, decks and note types.
async fn check(engine: &Engine) -> bool {
    match engine.client().misc().version().await {
        Ok(version) => {
            println!("Connected to AnkiConnect (version {})", version);
        }
        Err(e) => {
            debug!(error = %e, "Version probe failed");
            eprintln!("ERROR: Cannot connect to AnkiConnect");
            eprintln!("{}", REMEDIATION);
            return false;
        }
    }

    match engine.client().decks().names().await {
        Ok(decks) => println!("Available decks: {:?}", decks),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return false;
        }
    }

    match engine.client().models().names().await {
        Ok(models) => println!("Available note types: {:?}", models),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return false;
        }
    }

    true
}

/// Create the deck hierarchy; optionally seed sample cards.
async fn setup(engine: &Engine, with_samples: bool) -> bool {
    println!("Setting up MRCPsych deck structure in Anki...");
    println!("{}", "-".repeat(50));

    let report = match engine.setup().ensure_structure().await {
        Ok(report) => report,
        Err(Error::AnkiUnavailable) => {
            eprintln!("\nERROR: Cannot connect to Anki");
            eprintln!("{}", REMEDIATION);
            return false;
        }
        Err(e) => {
            eprintln!("\nERROR: {}", e);
            return false;
        }
    };

    for deck in mranki_engine::setup::DECK_STRUCTURE {
        if report.skipped.iter().any(|d| d == deck) {
            println!("  [exists] {}", deck);
        } else {
            println!("  [created] {}", deck);
        }
    }

    println!("{}", "-".repeat(50));
    println!(
        "Setup complete: {} decks created, {} already existed",
        report.created.len(),
        report.skipped.len()
    );

    match engine.client().models().names().await {
        Ok(models) => {
            println!("\nAvailable note types:");
            for model in models {
                println!("  - {}", model);
            }
        }
        Err(e) => warn!(error = %e, "Could not list note types"),
    }

    // Sample-card failures are reported but never undo deck creation
    if with_samples {
        println!("\nAdding sample cards to verify setup...");
        match engine.setup().add_samples().await {
            Ok(ids) => {
                for id in ids.into_iter().flatten() {
                    println!("  Created sample card: {}", id);
                }
                println!("\nSample cards created! Check Anki to verify.");
                println!("(You can delete cards tagged 'sample' after verification)");
            }
            Err(e) => eprintln!("\nERROR creating sample cards: {}", e),
        }
    }

    true
}
