// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Debate chat threads and message reactions.

use crate::db::RecordStore;
use crate::error::{AppError, Result};
use crate::ids;
use crate::models::{ChatMessage, ReactionKind, Reactions};

fn debate_not_found() -> AppError {
    AppError::NotFound("Debate not found".to_string())
}

/// Appends chat messages and toggles reactions.
#[derive(Clone)]
pub struct ChatService {
    store: RecordStore,
}

impl ChatService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The debate's chat thread, oldest first.
    pub async fn messages(&self, debate_id: &str) -> Result<Vec<ChatMessage>> {
        self.store
            .read(|records| records.debate(debate_id).map(|d| d.chat.clone()))
            .await
            .ok_or_else(debate_not_found)
    }

    /// Append a message and return the whole updated thread.
    pub async fn post_message(
        &self,
        debate_id: &str,
        author: &str,
        text: &str,
        now: i64,
    ) -> Result<Vec<ChatMessage>> {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            return Err(AppError::BadRequest(
                "Missing required fields: author, message".to_string(),
            ));
        }

        let message = ChatMessage {
            id: ids::generate(ids::MESSAGE_PREFIX, now)?,
            debate_id: debate_id.to_string(),
            author: author.to_string(),
            message: text.to_string(),
            timestamp: now,
            reactions: Reactions::default(),
        };
        let message_id = message.id.clone();

        let thread = self
            .store
            .write(|records| {
                let Some(debate) = records.debate_mut(debate_id) else {
                    return Err(debate_not_found());
                };
                debate.chat.push(message);
                Ok(debate.chat.clone())
            })
            .await?;

        tracing::info!(
            debate_id,
            message_id = %message_id,
            author,
            thread_len = thread.len(),
            "Chat message posted"
        );

        Ok(thread)
    }

    /// Toggle `user_id`'s reaction on a message and return the updated thread.
    pub async fn react(
        &self,
        debate_id: &str,
        message_id: &str,
        user_id: &str,
        kind: ReactionKind,
    ) -> Result<Vec<ChatMessage>> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AppError::BadRequest(
                "Missing required field: userId".to_string(),
            ));
        }

        self.store
            .write(|records| {
                let Some(debate) = records.debate_mut(debate_id) else {
                    return Err(debate_not_found());
                };
                let Some(message) = debate.message_mut(message_id) else {
                    return Err(AppError::NotFound("Message not found".to_string()));
                };

                let change = message.reactions.toggle(user_id, kind);
                tracing::debug!(
                    debate_id,
                    message_id,
                    user_id,
                    ?kind,
                    ?change,
                    upvotes = message.reactions.upvotes,
                    downvotes = message.reactions.downvotes,
                    "Reaction toggled"
                );

                Ok(debate.chat.clone())
            })
            .await
    }
}
