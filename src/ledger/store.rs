use super::*;
use crate::*;
use std::time::SystemTime;

/// Whole-snapshot persistence for a [`Ledger`].
///
/// Implementations never merge: `save` replaces whatever was there,
/// and readers observe either the previous or the new snapshot.
pub trait Store {
    /// Current snapshot. Empty when nothing has been persisted yet.
    fn load(&self) -> Result<Ledger>;
    /// Replace the persisted snapshot in full.
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Time of the last successful save, if any.
    fn modified(&self) -> Result<Option<SystemTime>>;
}

impl<S> Store for std::sync::Arc<S>
where
    S: Store + ?Sized,
{
    fn load(&self) -> Result<Ledger> {
        self.as_ref().load()
    }
    fn save(&self, ledger: &Ledger) -> Result<()> {
        self.as_ref().save(ledger)
    }
    fn modified(&self) -> Result<Option<SystemTime>> {
        self.as_ref().modified()
    }
}
