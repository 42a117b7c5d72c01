use super::*;
use crate::*;
use serde::Serialize;

/// Ledger entries ranked by points, highest first.
///
/// Uses competition ranking: a tie group shares the 1-based position
/// of its first member and the next group skips ahead, so points
/// `[10, 10, 5]` rank `[1, 1, 3]`. The sort is stable over ledger
/// order, which breaks ties by ascending user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Leaderboard(Vec<Row>);

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.0.iter()
    }
}

impl From<&Ledger> for Leaderboard {
    fn from(ledger: &Ledger) -> Self {
        let mut entries = ledger.iter().collect::<Vec<(&str, Points)>>();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        let mut rows = Vec::with_capacity(entries.len());
        let mut group = None;
        let mut rank = 0;
        for (position, (user, points)) in entries.into_iter().enumerate() {
            if group != Some(points) {
                group = Some(points);
                rank = position + 1;
            }
            rows.push(Row::new(rank, user.to_string(), points));
        }
        Self(rows)
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Ranks a ledger snapshot. Pure; safe to call from anywhere.
pub fn rank(ledger: &Ledger) -> Leaderboard {
    Leaderboard::from(ledger)
}
