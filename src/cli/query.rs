use crate::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Register a new player at zero points", alias = "reg")]
    Register {
        #[arg(required = true)]
        user: String,
    },
    #[command(about = "Show a player's current points", alias = "pts")]
    Points {
        #[arg(required = true)]
        user: String,
    },
    #[command(about = "List every registered player and their points", alias = "ls")]
    Roster,
    #[command(about = "Show the ranked leaderboard", alias = "lb")]
    Board,
    #[command(about = "Show when the ledger was last written")]
    Stamp,
    #[command(about = "Add or subtract points from a player (admin)", alias = "add")]
    Update {
        #[arg(required = true)]
        user: String,
        #[arg(required = true, allow_negative_numbers = true)]
        delta: Points,
        #[arg(long)]
        password: Option<String>,
    },
    #[command(about = "Overwrite a player's points (admin)")]
    Set {
        #[arg(required = true)]
        user: String,
        #[arg(required = true, allow_negative_numbers = true)]
        value: Points,
        #[arg(long)]
        password: Option<String>,
    },
    #[command(about = "Replace the whole ledger from a JSON file (admin)")]
    Import {
        #[arg(required = true)]
        file: PathBuf,
        #[arg(long)]
        password: Option<String>,
    },
    #[command(about = "Write the whole ledger to a JSON file (admin)")]
    Export {
        #[arg(default_value = LEDGER_FILE)]
        file: PathBuf,
        #[arg(long)]
        password: Option<String>,
    },
    #[command(about = "Print the SHA-256 digest to configure as ADMIN_DIGEST")]
    Digest {
        #[arg(required = true)]
        password: String,
    },
}

impl Query {
    /// Parses one line of REPL input.
    pub fn read(input: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))
    }
}
