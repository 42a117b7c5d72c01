//! Persistence and mutation of the point ledger.
//!
//! - [`Ledger`] — in-memory snapshot of user balances
//! - [`Store`] — whole-snapshot load/save capability
//! - [`Disk`] — JSON file store with atomic replace
//! - [`Memory`] — process-local store
//! - [`Book`] — serialized read-modify-write API over any store
mod book;
mod disk;
#[allow(clippy::module_inception)]
mod ledger;
mod memory;
mod store;

pub use book::*;
pub use disk::*;
pub use ledger::*;
pub use memory::*;
pub use store::*;
