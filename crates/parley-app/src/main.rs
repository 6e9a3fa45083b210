//! Parley demo binary - composition root.
//!
//! 1. Parse CLI args and load configuration from TOML
//! 2. Initialise tracing on stderr
//! 3. Begin the discount conversation with a console participant
//! 4. Feed stdin lines to the router until the conversation ends

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use parley_app::cli::CliArgs;
use parley_app::console::ConsoleParticipant;
use parley_app::demo::{discount_conversation, DemoSettings};
use parley_core::config::ParleyConfig;
use parley_prompt::{begin, Delivery, ExampleGenerator, LineRouter, Participant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config_found = config_file.exists();
    let (mut config, config_error) = if config_found {
        match ParleyConfig::load(&config_file) {
            Ok(config) => (config, None),
            Err(e) => (ParleyConfig::default(), Some(e)),
        }
    } else {
        (ParleyConfig::default(), None)
    };
    args.apply_overrides(&mut config);

    // Tracing. stdout carries the conversation, so logs go to stderr.
    let log_level = args.resolve_log_level(&config);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting Parley v{}", env!("CARGO_PKG_VERSION"));
    match (config_found, config_error) {
        (_, Some(e)) => {
            tracing::warn!(path = %config_file.display(), error = %e, "Invalid configuration; using defaults")
        }
        (true, None) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        (false, None) => {
            tracing::info!(path = %config_file.display(), "No configuration file; using defaults")
        }
    }

    let console = ConsoleParticipant::stdout(config.display.clone());
    let examples = Arc::new(ExampleGenerator::from_seed_option(config.time.example_seed));
    let router = LineRouter::new();

    let first = discount_conversation(console.clone(), DemoSettings::from(&config), examples)?;
    begin(first.boxed(), &router)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while router.is_awaiting(console.id()) {
        let Some(line) = lines.next_line().await? else {
            tracing::info!("Input closed before the conversation finished");
            break;
        };
        let line = line.trim_end_matches('\r');
        match router.deliver(console.id(), line) {
            Delivery::Unrouted | Delivery::Consumed { cancel_chat: false } => {
                console.echo_chat(line)
            }
            Delivery::Consumed { cancel_chat: true } => {}
        }
    }

    tracing::info!("Conversation finished");
    Ok(())
}
