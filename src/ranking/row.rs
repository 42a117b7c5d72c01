use super::*;
use crate::*;
use serde::Serialize;

/// One ranked line of the leaderboard. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    rank: Rank,
    #[serde(rename = "user_id")]
    user: String,
    points: Points,
    highlight: Highlight,
}

impl Row {
    pub fn new(rank: Rank, user: String, points: Points) -> Self {
        Self {
            highlight: Highlight::classify(rank, points),
            rank,
            user,
            points,
        }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn points(&self) -> Points {
        self.points
    }
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>4}. {:<24}{:>8}", self.rank, self.user, self.points)
    }
}
