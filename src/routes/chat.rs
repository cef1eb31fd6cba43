// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chat routes: thread listing, posting and reactions.

use crate::error::Result;
use crate::models::{ChatMessage, ReactionKind};
use crate::routes::extract::ValidatedJson;
use crate::time_utils::now_millis;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debates/{id}/chat", get(get_messages).post(post_message))
        .route(
            "/debates/{id}/messages/{message_id}/reactions",
            post(react),
        )
}

/// Get a debate's chat thread.
async fn get_messages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>> {
    Ok(Json(state.chat.messages(&id).await?))
}

#[derive(Debug, Deserialize, Validate)]
struct PostMessageRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    author: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 1000))]
    message: String,
}

/// Post a chat message and return the updated thread.
async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<PostMessageRequest>,
) -> Result<Json<Vec<ChatMessage>>> {
    let thread = state
        .chat
        .post_message(&id, &req.author, &req.message, now_millis())
        .await?;
    Ok(Json(thread))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct ReactionRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    user_id: String,
    reaction_type: ReactionKind,
}

/// Toggle an upvote/downvote on a message and return the updated thread.
async fn react(
    State(state): State<Arc<AppState>>,
    Path((id, message_id)): Path<(String, String)>,
    ValidatedJson(req): ValidatedJson<ReactionRequest>,
) -> Result<Json<Vec<ChatMessage>>> {
    let thread = state
        .chat
        .react(&id, &message_id, &req.user_id, req.reaction_type)
        .await?;
    Ok(Json(thread))
}
