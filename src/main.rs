//! Hermes server binary

use anyhow::Result;
use clap::Parser;
use hermes::{logging, Config};
use tracing::info;

#[derive(Parser)]
#[command(name = "hermes")]
#[command(about = "An in-memory vector similarity store", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.config.log_level);
    let addr = cli.config.validate()?;

    info!("Hermes: in-memory vector similarity store");
    hermes::server::start(addr).await?;
    Ok(())
}
