// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod chat;
pub mod debate;
pub mod user;

pub use chat::{ChatMessage, ReactionChange, ReactionKind, Reactions};
pub use debate::{Debate, DebateStatus, Outcome, VoteTally, VotingOptions};
pub use user::{User, UserUpdate};
