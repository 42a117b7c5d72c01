//! Interactive CLI for the Point Ledger
//!
//! Register players, look up balances and the leaderboard, and run
//! admin adjustments, imports and exports from a terminal.

use clap::Parser;
use pokerpoints::*;

fn main() -> anyhow::Result<()> {
    log()?;
    let settings = Args::parse().apply(Settings::from_env());
    CLI::from(settings).run()
}
