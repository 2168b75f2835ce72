//! Ledgercalc recalculation CLI
//!
//! Loads a document and the form events raised against it, replays them
//! through the recalculation engine and prints the resulting document.

mod session;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ledgercalc_core::Recalculator;
use ledgercalc_shared::{AppConfig, LogConfig};

use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "ledgercalc-recalc", version, about = "Replay form events against a document")]
struct Cli {
    /// Session file with `document` and `events` (default: stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Configuration file used in place of `config/default`
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Pretty-print the output document
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.log);

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };
    let session = Session::read(BufReader::new(reader)).context("Failed to read session")?;

    let recalc = Recalculator::new(config.decimals);
    info!(
        kind = %session.document.kind,
        lines = session.document.lines.len(),
        events = session.events.len(),
        "Replaying session"
    );
    let (document, outcomes) = session.replay(&recalc);
    let applied = outcomes.iter().filter(|o| o.is_applied()).count();
    info!(applied, skipped = outcomes.len() - applied, "Session replayed");

    let mut stdout = io::stdout().lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut stdout, &document)?;
    } else {
        serde_json::to_writer(&mut stdout, &document)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into());
    let (fmt_layer, json_layer) = if log.json {
        (None, Some(tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
    } else {
        (Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(json_layer)
        .init();
}
