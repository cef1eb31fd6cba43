// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Results route.

use crate::error::Result;
use crate::services::results::ResultsSummary;
use crate::time_utils::now_millis;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/results", get(get_results))
}

/// Outcomes of ended debates, participation totals and the most popular debates.
async fn get_results(State(state): State<Arc<AppState>>) -> Result<Json<ResultsSummary>> {
    Ok(Json(state.results.summary(now_millis()).await?))
}
