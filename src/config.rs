use crate::*;
use std::path::PathBuf;

/// Environment variable naming the ledger file.
pub const ENV_FILE: &str = "POINTS_FILE";
/// Environment variable holding the hex SHA-256 admin digest.
pub const ENV_DIGEST: &str = "ADMIN_DIGEST";
/// Environment variable holding the HTTP listen address.
pub const ENV_BIND: &str = "BIND_ADDR";
/// Listen address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub file: PathBuf,
    pub digest: String,
    pub bind: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    /// Resolves settings through `lookup`. An admin digest that is set
    /// but empty is kept as is, which locks every privileged action.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            file: lookup(ENV_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(LEDGER_FILE)),
            digest: lookup(ENV_DIGEST)
                .map(|d| d.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_DIGEST.to_string()),
            bind: lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string()),
        }
    }
    pub fn gate(&self) -> Gate {
        let gate = Gate::new(self.digest.clone());
        if gate.is_default() {
            log::warn!("{} is unset, using the built-in admin password", ENV_DIGEST);
        }
        gate
    }
    pub fn book(&self) -> Book<Disk> {
        log::info!("ledger at {}", self.file.display());
        Book::from(Disk::new(&self.file))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Command line overrides shared by the binaries.
#[cfg(feature = "server")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Ledger file, overrides POINTS_FILE
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Listen address, overrides BIND_ADDR
    #[arg(long)]
    pub bind: Option<String>,
}

#[cfg(feature = "server")]
impl Args {
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(file) = self.file {
            settings.file = file;
        }
        if let Some(bind) = self.bind {
            settings.bind = bind;
        }
        settings
    }
}
