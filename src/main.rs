mod config;
mod input;
mod ledger;
mod models;
mod run;
mod summary;
mod ui;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FINLEDGER_LOG";

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let config = config::LedgerConfig::from_env()?;
    let ledger = ledger::Ledger::new(config);

    match args.len() {
        0 | 1 => run::as_menu(&ledger),
        _ => run::as_cli(&args, &ledger),
    }
}

// Logs go to stderr so they never interleave with prompts on stdout.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
