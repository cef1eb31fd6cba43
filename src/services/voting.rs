// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Vote bookkeeping.
//!
//! One voter gets one vote per debate, counted as a single unit whatever
//! amount they may have staked on-chain.

use crate::db::RecordStore;
use crate::error::{AppError, Result};
use crate::models::Debate;

/// Why a vote was not counted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteRejected {
    #[error("Debate not found")]
    NotFound,

    #[error("Debate is not active")]
    Inactive,

    #[error("Voter has already voted on this debate")]
    AlreadyVoted,
}

impl From<VoteRejected> for AppError {
    fn from(rejected: VoteRejected) -> Self {
        match rejected {
            VoteRejected::NotFound => AppError::NotFound(rejected.to_string()),
            VoteRejected::Inactive | VoteRejected::AlreadyVoted => {
                AppError::BadRequest(rejected.to_string())
            }
        }
    }
}

/// Records votes against debates in the store.
#[derive(Clone)]
pub struct VotingService {
    store: RecordStore,
}

impl VotingService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Cast `voter_id`'s vote for `option` and return the updated debate.
    pub async fn vote(
        &self,
        debate_id: &str,
        voter_id: &str,
        option: &str,
        now: i64,
    ) -> Result<Debate> {
        if voter_id.trim().is_empty() || option.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Missing required fields: voterId, option".to_string(),
            ));
        }

        let result = self
            .store
            .write(|records| {
                let Some(debate) = records.debate_mut(debate_id) else {
                    return Err(AppError::from(VoteRejected::NotFound));
                };
                debate.refresh_status(now);

                if !debate.is_active(now) {
                    return Err(VoteRejected::Inactive.into());
                }
                if debate.votes.has_voted(voter_id) {
                    return Err(VoteRejected::AlreadyVoted.into());
                }

                if !debate.voting_options.labels().contains(&option) {
                    tracing::warn!(
                        debate_id,
                        option,
                        "Vote for an option label the debate does not define"
                    );
                }
                debate.votes.record(voter_id, option);
                Ok(debate.clone())
            })
            .await;

        match &result {
            Ok(debate) => tracing::info!(
                debate_id,
                voter_id,
                option,
                total_votes = debate.votes.total(),
                "Vote recorded"
            ),
            Err(e) => tracing::debug!(debate_id, voter_id, error = %e, "Vote rejected"),
        }

        result
    }
}
