// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Debate model, vote tallies and lifecycle status.

use crate::models::chat::ChatMessage;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored lifecycle status of a debate.
///
/// The stored value is a cache: a debate whose end time has passed is
/// never active, whatever this field says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DebateStatus {
    Active,
    Ended,
    Cancelled,
}

/// The two labeled choices of a debate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct VotingOptions {
    pub option1: String,
    pub option2: String,
}

impl VotingOptions {
    pub fn labels(&self) -> [&str; 2] {
        [self.option1.as_str(), self.option2.as_str()]
    }
}

/// Result of a debate, derived from its tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Outcome {
    Winner { option: String },
    Tie,
}

/// Per-option vote counts and the set of voters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct VoteTally {
    /// Vote count per option label
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, number>"))]
    pub tallies: BTreeMap<String, u64>,
    /// Everyone who has voted (at most once each)
    #[serde(default)]
    pub voters: BTreeSet<String>,
}

impl VoteTally {
    /// Zero-initialized tallies for both options.
    pub fn new(options: &VotingOptions) -> Self {
        Self {
            tallies: options
                .labels()
                .iter()
                .map(|label| (label.to_string(), 0))
                .collect(),
            voters: BTreeSet::new(),
        }
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voters.contains(voter_id)
    }

    /// Record one vote.
    ///
    /// Returns `false` without touching the tallies if the voter already voted.
    /// An unseen option label gets a fresh tally entry.
    pub fn record(&mut self, voter_id: &str, option: &str) -> bool {
        if !self.voters.insert(voter_id.to_string()) {
            return false;
        }
        *self.tallies.entry(option.to_string()).or_insert(0) += 1;
        true
    }

    pub fn count(&self, option: &str) -> u64 {
        self.tallies.get(option).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.tallies.values().sum()
    }

    /// Share of the votes for `option`, rounded to a whole percent.
    pub fn percentage(&self, option: &str) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.count(option) as f64 / total as f64) * 100.0).round() as u32
    }

    /// Winner when one option has strictly more votes, otherwise a tie.
    pub fn outcome(&self, options: &VotingOptions) -> Outcome {
        let first = self.count(&options.option1);
        let second = self.count(&options.option2);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner {
                option: options.option1.clone(),
            },
            std::cmp::Ordering::Less => Outcome::Winner {
                option: options.option2.clone(),
            },
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Stored debate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Debate {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Username or wallet address of the creator
    pub created_by: String,
    /// Creation time (epoch milliseconds)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub created_at: i64,
    /// End of voting (epoch milliseconds)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub ends_at: i64,
    pub status: DebateStatus,
    pub voting_options: VotingOptions,
    pub votes: VoteTally,
    /// Chat thread, oldest first
    #[serde(default)]
    pub chat: Vec<ChatMessage>,
    /// Amount staked on-chain, as last reported by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_staked: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Debate {
    /// Whether votes are accepted at `now` (epoch milliseconds).
    pub fn is_active(&self, now: i64) -> bool {
        self.status == DebateStatus::Active && self.ends_at > now
    }

    /// Whether voting is over, either by status or by the clock.
    pub fn has_ended(&self, now: i64) -> bool {
        self.status == DebateStatus::Ended || self.ends_at <= now
    }

    /// Move an expired active debate to `Ended`.
    ///
    /// Returns `true` if the stored status changed.
    pub fn refresh_status(&mut self, now: i64) -> bool {
        if self.status == DebateStatus::Active && self.ends_at <= now {
            self.status = DebateStatus::Ended;
            true
        } else {
            false
        }
    }

    pub fn message_mut(&mut self, message_id: &str) -> Option<&mut ChatMessage> {
        self.chat.iter_mut().find(|m| m.id == message_id)
    }
}
