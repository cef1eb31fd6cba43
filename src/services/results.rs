// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Results view: outcomes of ended debates and overall participation.
//!
//! Winners are derived from the tallies every time; nothing here is stored.

use crate::db::{RecordStore, Records};
use crate::error::Result;
use crate::models::{Debate, DebateStatus, Outcome};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Number of debates in the "most popular" list.
const POPULAR_LIMIT: usize = 5;

/// Totals across ended debates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResultsStats {
    pub total_debates: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_votes: u64,
    pub total_participants: u32,
}

/// Vote count and share for one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct OptionResult {
    pub option: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub votes: u64,
    pub percentage: u32,
}

/// Outcome of a single debate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DebateResult {
    pub id: String,
    pub title: String,
    pub created_by: String,
    pub status: DebateStatus,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub ends_at: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_votes: u64,
    pub options: Vec<OptionResult>,
    pub outcome: Outcome,
}

impl DebateResult {
    fn from_debate(debate: &Debate) -> Self {
        let options = debate
            .voting_options
            .labels()
            .iter()
            .map(|label| OptionResult {
                option: label.to_string(),
                votes: debate.votes.count(label),
                percentage: debate.votes.percentage(label),
            })
            .collect();

        Self {
            id: debate.id.clone(),
            title: debate.title.clone(),
            created_by: debate.created_by.clone(),
            status: debate.status,
            ends_at: debate.ends_at,
            total_votes: debate.votes.total(),
            options,
            outcome: debate.votes.outcome(&debate.voting_options),
        }
    }
}

/// Results page payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResultsSummary {
    pub stats: ResultsStats,
    /// Most-voted debates of any status
    pub popular: Vec<DebateResult>,
    /// Every ended debate, newest first
    pub debates: Vec<DebateResult>,
}

/// Builds the results summary from the store.
#[derive(Clone)]
pub struct ResultsService {
    store: RecordStore,
}

impl ResultsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn summary(&self, now: i64) -> Result<ResultsSummary> {
        self.store.refresh_statuses(now).await?;
        Ok(self.store.read(|records| summarize(records, now)).await)
    }
}

fn summarize(records: &Records, now: i64) -> ResultsSummary {
    let all = records.debates_newest_first();
    let ended: Vec<&Debate> = all.iter().copied().filter(|d| d.has_ended(now)).collect();

    let stats = ResultsStats {
        total_debates: ended.len() as u32,
        total_votes: ended.iter().map(|d| d.votes.total()).sum(),
        total_participants: ended.iter().map(|d| d.votes.voters.len() as u32).sum(),
    };

    // Stable sort keeps newest-first among equal vote counts.
    let mut by_votes = all.clone();
    by_votes.sort_by(|a, b| b.votes.total().cmp(&a.votes.total()));
    let popular = by_votes
        .into_iter()
        .take(POPULAR_LIMIT)
        .map(DebateResult::from_debate)
        .collect();

    ResultsSummary {
        stats,
        popular,
        debates: ended.into_iter().map(DebateResult::from_debate).collect(),
    }
}
