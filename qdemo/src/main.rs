use std::io;

use anyhow::Result;
use clap::Parser;
use qdemo::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit = qdemo::run(stdin.lock(), stdout.lock(), cli.session_config())?;

    info!(?exit, "exiting");
    Ok(())
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
