use crate::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub user_id: String,
    pub delta: Points,
}

#[derive(Debug, Deserialize)]
pub struct SetRequest {
    pub user_id: String,
    pub points: Points,
}
