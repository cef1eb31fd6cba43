// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Chat messages and per-user reactions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Kind of reaction a user can leave on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ReactionKind {
    Upvote,
    Downvote,
}

/// What a reaction toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    Added,
    Withdrawn,
    Switched,
}

/// Reaction counters plus the reaction each user currently has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Reactions {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub upvotes: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub downvotes: u64,
    /// User id -> their active reaction (one per user)
    #[serde(default)]
    pub reactors: BTreeMap<String, ReactionKind>,
}

impl Reactions {
    fn counter_mut(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::Upvote => &mut self.upvotes,
            ReactionKind::Downvote => &mut self.downvotes,
        }
    }

    /// Toggle `user_id`'s reaction.
    ///
    /// Same kind again withdraws it, the other kind switches it.
    /// Counters never go below zero.
    pub fn toggle(&mut self, user_id: &str, kind: ReactionKind) -> ReactionChange {
        match self.reactors.get(user_id).copied() {
            None => {
                self.reactors.insert(user_id.to_string(), kind);
                *self.counter_mut(kind) += 1;
                ReactionChange::Added
            }
            Some(previous) if previous == kind => {
                self.reactors.remove(user_id);
                let counter = self.counter_mut(kind);
                *counter = counter.saturating_sub(1);
                ReactionChange::Withdrawn
            }
            Some(previous) => {
                self.reactors.insert(user_id.to_string(), kind);
                let old = self.counter_mut(previous);
                *old = old.saturating_sub(1);
                *self.counter_mut(kind) += 1;
                ReactionChange::Switched
            }
        }
    }
}

/// A message in a debate's chat thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChatMessage {
    pub id: String,
    pub debate_id: String,
    pub author: String,
    pub message: String,
    /// Post time (epoch milliseconds)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
    #[serde(default)]
    pub reactions: Reactions,
}
