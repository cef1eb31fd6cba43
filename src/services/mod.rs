// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod chat;
pub mod lifecycle;
pub mod results;
pub mod users;
pub mod voting;

pub use chat::ChatService;
pub use lifecycle::{LifecycleService, NewDebate};
pub use results::ResultsService;
pub use users::UsersService;
pub use voting::{VoteRejected, VotingService};
