use crate::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub user_id: String,
    pub points: Points,
}

impl From<(String, Points)> for PointsResponse {
    fn from((user_id, points): (String, Points)) -> Self {
        Self { user_id, points }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub rows: Leaderboard,
    pub updated: Stamp,
}

#[derive(Debug, Serialize)]
pub struct StampResponse {
    pub updated: Stamp,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub users: usize,
}
