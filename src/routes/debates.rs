// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Debate routes: listing, creation, lookup and voting.

use crate::config::MAX_DURATION_HOURS;
use crate::error::Result;
use crate::models::Debate;
use crate::routes::extract::ValidatedJson;
use crate::services::NewDebate;
use crate::time_utils::now_millis;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debates", get(list_debates).post(create_debate))
        .route("/debates/{id}", get(get_debate).post(vote))
}

#[derive(Deserialize)]
struct ListQuery {
    /// Include ended and cancelled debates
    #[serde(default)]
    all: bool,
}

/// List active debates (or every debate with `?all=true`), newest first.
async fn list_debates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Debate>>> {
    let debates = state.lifecycle.list(params.all, now_millis()).await?;
    tracing::debug!(all = params.all, count = debates.len(), "Listing debates");
    Ok(Json(debates))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct CreateDebateRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 2000))]
    description: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    created_by: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    option1: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    option2: String,
    #[validate(range(min = 1, max = MAX_DURATION_HOURS))]
    duration_hours: Option<u32>,
    #[validate(length(max = 50))]
    category: Option<String>,
}

/// Create a debate. Fails if the creator already has an active one.
async fn create_debate(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateDebateRequest>,
) -> Result<(StatusCode, Json<Debate>)> {
    let new = NewDebate {
        title: req.title,
        description: req.description,
        created_by: req.created_by,
        option1: req.option1,
        option2: req.option2,
        duration_hours: req.duration_hours,
        category: req.category,
    };

    let debate = state.lifecycle.create_debate(new, now_millis()).await?;
    Ok((StatusCode::CREATED, Json(debate)))
}

/// Get one debate by ID.
async fn get_debate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Debate>> {
    Ok(Json(state.lifecycle.get(&id, now_millis()).await?))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct VoteRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    voter_id: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    option: String,
}

/// Cast a vote and return the updated debate.
async fn vote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<VoteRequest>,
) -> Result<Json<Debate>> {
    let debate = state
        .voting
        .vote(&id, req.voter_id.trim(), req.option.trim(), now_millis())
        .await?;
    Ok(Json(debate))
}
