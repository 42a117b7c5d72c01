/// Errors surfaced by ledger operations.
///
/// Absence of a user and duplicate registration are not errors:
/// they come back as `None` and `false` respectively.
#[derive(Debug)]
pub enum LedgerError {
    /// Persisted location could not be read or written.
    Storage(std::io::Error),
    /// Persisted content exists but is not a flat object of integers.
    Corrupt(String),
    /// Caller-supplied input was rejected; nothing was written.
    Invalid(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "storage error: {}", e),
            Self::Corrupt(s) => write!(f, "corrupt ledger: {}", s),
            Self::Invalid(s) => write!(f, "invalid input: {}", s),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e)
    }
}

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;
