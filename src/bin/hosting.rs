//! Hosting Server Binary
//!
//! Serves the point ledger over HTTP for the game night front end.

use clap::Parser;
use pokerpoints::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let settings = Args::parse().apply(Settings::from_env());
    server::run(settings).await?;
    Ok(())
}
