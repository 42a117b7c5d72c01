//! Leaderboard construction from a ledger snapshot.
//!
//! - [`Leaderboard`] — competition-ranked rows, highest points first
//! - [`Row`] — rank, user, points and [`Highlight`]
mod highlight;
mod leaderboard;
mod row;

pub use highlight::*;
pub use leaderboard::*;
pub use row::*;
