// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Debate Arena: two-option debates with voting, chat and reactions
//!
//! This crate provides the backend API: debate lifecycle, one-vote-per-user
//! bookkeeping, chat threads with toggled reactions, and a results view.
//! On-chain staking is handled by the client against an external contract.

pub mod config;
pub mod db;
pub mod error;
pub mod ids;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::RecordStore;
use services::{ChatService, LifecycleService, ResultsService, UsersService, VotingService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
    pub lifecycle: LifecycleService,
    pub voting: VotingService,
    pub chat: ChatService,
    pub users: UsersService,
    pub results: ResultsService,
}

impl AppState {
    /// Wire every service to the same store.
    pub fn new(config: Config, store: RecordStore) -> Self {
        Self {
            lifecycle: LifecycleService::new(store.clone(), config.default_duration_hours),
            voting: VotingService::new(store.clone()),
            chat: ChatService::new(store.clone()),
            users: UsersService::new(store.clone()),
            results: ResultsService::new(store.clone()),
            config,
            store,
        }
    }
}
