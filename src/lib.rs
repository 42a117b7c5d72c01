//! Shared point ledger for a recurring poker game.
//!
//! Players register and accrue or spend points; an administrator adjusts
//! balances, bulk-replaces the ledger and reads a ranked leaderboard.
//!
//! ## Core
//!
//! - [`Book`] — locked read-modify-write API over a [`Store`]
//! - [`Disk`] — single JSON file store, atomically replaced on save
//! - [`Leaderboard`] — competition ranking with [`Highlight`]s
//! - [`Gate`] — SHA-256 admin password check
//! - [`Stamp`] — last-modified marker in Tokyo time
//!
//! ## Callers
//!
//! With the `server` feature, [`CLI`] drives the ledger from a terminal
//! and [`server`] exposes it over HTTP.
mod auth;
mod clock;
mod config;
mod error;
mod ledger;
mod ranking;

pub use auth::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use ledger::*;
pub use ranking::*;

#[cfg(feature = "server")]
mod cli;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub use cli::*;

/// Point balance of a single player. Unbounded in sign.
pub type Points = i64;
/// 1-based leaderboard position.
pub type Rank = usize;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
