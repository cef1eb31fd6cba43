// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes.

use crate::error::{AppError, Result};
use crate::models::{User, UserUpdate};
use crate::routes::extract::ValidatedJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/users/{fid}", get(get_user).put(upsert_user))
}

fn parse_fid(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid fid: must be a positive integer".to_string()))
}

/// Get a user profile by Farcaster ID.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(fid): Path<String>,
) -> Result<Json<User>> {
    let fid = parse_fid(&fid)?;
    Ok(Json(state.users.get(fid).await?))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct UpsertUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    username: String,
    #[validate(length(max = 100))]
    display_name: Option<String>,
    #[validate(url)]
    avatar: Option<String>,
    total_debates: Option<u32>,
    total_votes: Option<u32>,
    #[validate(range(min = 0.0, max = 100.0))]
    win_rate: Option<f64>,
}

/// Create a user, or merge the provided fields into the existing profile.
async fn upsert_user(
    State(state): State<Arc<AppState>>,
    Path(fid): Path<String>,
    ValidatedJson(req): ValidatedJson<UpsertUserRequest>,
) -> Result<Json<User>> {
    let fid = parse_fid(&fid)?;
    let update = UserUpdate {
        username: req.username,
        display_name: req.display_name,
        avatar: req.avatar,
        total_debates: req.total_debates,
        total_votes: req.total_votes,
        win_rate: req.win_rate,
    };
    Ok(Json(state.users.upsert(fid, update).await?))
}
