use crate::*;
use serde::Serialize;

/// Display classification of a leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    None,
    Top,
    Negative,
}

impl Highlight {
    /// First place wins over a negative balance.
    pub fn classify(rank: Rank, points: Points) -> Self {
        if rank == 1 {
            Self::Top
        } else if points < 0 {
            Self::Negative
        } else {
            Self::None
        }
    }
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Top => write!(f, "top"),
            Self::Negative => write!(f, "negative"),
        }
    }
}
