// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Debate lifecycle: creation, lazy status refresh and lookup.
//!
//! A debate is active until its end time; the stored status is refreshed
//! lazily whenever debates are listed, fetched or voted on. Each creator may
//! have at most one active debate at a time.

use crate::config::MAX_DURATION_HOURS;
use crate::db::RecordStore;
use crate::error::{AppError, Result};
use crate::ids;
use crate::models::{Debate, DebateStatus, VoteTally, VotingOptions};
use crate::time_utils::{format_millis_rfc3339, hours_to_millis};

/// Input for a new debate.
#[derive(Debug, Clone)]
pub struct NewDebate {
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub option1: String,
    pub option2: String,
    /// Falls back to the configured default when `None`
    pub duration_hours: Option<u32>,
    pub category: Option<String>,
}

/// Creates debates and keeps their status current.
#[derive(Clone)]
pub struct LifecycleService {
    store: RecordStore,
    default_duration_hours: u32,
}

impl LifecycleService {
    pub fn new(store: RecordStore, default_duration_hours: u32) -> Self {
        Self {
            store,
            default_duration_hours,
        }
    }

    /// End every active debate whose end time has passed.
    pub async fn refresh_statuses(&self, now: i64) -> Result<usize> {
        Ok(self.store.refresh_statuses(now).await?)
    }

    /// Whether `user_id` currently has an active debate.
    pub async fn has_active_debate_for_creator(&self, user_id: &str, now: i64) -> Result<bool> {
        self.refresh_statuses(now).await?;
        Ok(self
            .store
            .read(|records| records.has_active_debate_for(user_id, now))
            .await)
    }

    /// Validate and store a new debate.
    pub async fn create_debate(&self, new: NewDebate, now: i64) -> Result<Debate> {
        let title = required("title", &new.title)?;
        let description = required("description", &new.description)?;
        let created_by = required("createdBy", &new.created_by)?;
        let option1 = required("option1", &new.option1)?;
        let option2 = required("option2", &new.option2)?;

        if option1 == option2 {
            return Err(AppError::BadRequest(
                "option1 and option2 must be different".to_string(),
            ));
        }

        let duration_hours = new.duration_hours.unwrap_or(self.default_duration_hours);
        if duration_hours == 0 || duration_hours > MAX_DURATION_HOURS {
            return Err(AppError::BadRequest(format!(
                "durationHours must be between 1 and {}",
                MAX_DURATION_HOURS
            )));
        }

        let voting_options = VotingOptions {
            option1: option1.to_string(),
            option2: option2.to_string(),
        };
        let debate = Debate {
            id: ids::generate(ids::DEBATE_PREFIX, now)?,
            title: title.to_string(),
            description: description.to_string(),
            created_by: created_by.to_string(),
            created_at: now,
            ends_at: now + hours_to_millis(duration_hours),
            status: DebateStatus::Active,
            votes: VoteTally::new(&voting_options),
            voting_options,
            chat: Vec::new(),
            total_staked: None,
            category: new
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        };

        // The creator check and the insert share one write guard.
        let created = self
            .store
            .write(|records| {
                records.refresh_statuses(now);
                if records.has_active_debate_for(&debate.created_by, now) {
                    return Err(AppError::BadRequest(
                        "Creator already has an active debate".to_string(),
                    ));
                }
                records.insert_debate(debate.clone());
                Ok(debate)
            })
            .await?;

        tracing::info!(
            debate_id = %created.id,
            created_by = %created.created_by,
            ends_at = %format_millis_rfc3339(created.ends_at),
            "Debate created"
        );

        Ok(created)
    }

    /// Debates newest first; only active ones unless `include_all`.
    pub async fn list(&self, include_all: bool, now: i64) -> Result<Vec<Debate>> {
        self.refresh_statuses(now).await?;
        Ok(self
            .store
            .read(|records| {
                records
                    .debates_newest_first()
                    .into_iter()
                    .filter(|d| include_all || d.is_active(now))
                    .cloned()
                    .collect()
            })
            .await)
    }

    /// Fetch one debate with its status brought up to date.
    pub async fn get(&self, id: &str, now: i64) -> Result<Debate> {
        self.refresh_statuses(now).await?;
        self.store
            .read(|records| records.debate(id).cloned())
            .await
            .ok_or_else(|| AppError::NotFound("Debate not found".to_string()))
    }
}

/// Trimmed value of a required text field.
fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            field
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DURATION_HOURS;
    use crate::models::debate::tests::make_debate;

    const NOW: i64 = 1_704_103_200_000;

    fn service() -> (LifecycleService, RecordStore) {
        let store = RecordStore::in_memory();
        (
            LifecycleService::new(store.clone(), DEFAULT_DURATION_HOURS),
            store,
        )
    }

    fn new_debate(created_by: &str) -> NewDebate {
        NewDebate {
            title: "X vs Y".to_string(),
            description: "Which is better?".to_string(),
            created_by: created_by.to_string(),
            option1: "X".to_string(),
            option2: "Y".to_string(),
            duration_hours: Some(1),
            category: None,
        }
    }

    #[tokio::test]
    async fn test_create_debate_initial_state() {
        let (service, _) = service();

        let debate = service.create_debate(new_debate("alice"), NOW).await.unwrap();

        assert!(debate.id.starts_with("debate_"));
        assert_eq!(debate.status, DebateStatus::Active);
        assert_eq!(debate.created_at, NOW);
        assert_eq!(debate.ends_at, NOW + 3_600_000);
        assert_eq!(debate.votes.count("X"), 0);
        assert_eq!(debate.votes.count("Y"), 0);
        assert_eq!(debate.votes.tallies.len(), 2);
        assert!(debate.votes.voters.is_empty());
        assert!(debate.chat.is_empty());
    }

    #[tokio::test]
    async fn test_create_debate_default_duration() {
        let (service, _) = service();
        let mut new = new_debate("alice");
        new.duration_hours = None;

        let debate = service.create_debate(new, NOW).await.unwrap();

        assert_eq!(debate.ends_at - debate.created_at, 24 * 3_600_000);
    }

    #[tokio::test]
    async fn test_create_debate_rejects_missing_fields() {
        let (service, _) = service();
        let mut new = new_debate("alice");
        new.option2 = "   ".to_string();

        let err = service.create_debate(new, NOW).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("option2")));
    }

    #[tokio::test]
    async fn test_create_debate_rejects_identical_options() {
        let (service, _) = service();
        let mut new = new_debate("alice");
        new.option2 = " X ".to_string();

        let err = service.create_debate(new, NOW).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_create_debate_rejects_bad_duration() {
        let (service, _) = service();
        let mut new = new_debate("alice");
        new.duration_hours = Some(0);

        let err = service.create_debate(new, NOW).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_one_active_debate_per_creator() {
        let (service, _) = service();
        service.create_debate(new_debate("alice"), NOW).await.unwrap();

        let err = service
            .create_debate(new_debate("alice"), NOW + 1_000)
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::BadRequest(ref msg) if msg.contains("active debate"))
        );

        // Other creators are unaffected
        service.create_debate(new_debate("bob"), NOW).await.unwrap();

        // Once the first debate ends, alice may create another
        service
            .create_debate(new_debate("alice"), NOW + 3_600_000)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_has_active_debate_for_creator() {
        let (service, _) = service();
        assert!(!service
            .has_active_debate_for_creator("alice", NOW)
            .await
            .unwrap());

        service.create_debate(new_debate("alice"), NOW).await.unwrap();

        assert!(service
            .has_active_debate_for_creator("alice", NOW + 1)
            .await
            .unwrap());
        assert!(!service
            .has_active_debate_for_creator("alice", NOW + 3_600_000)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_list_filters_and_refreshes() {
        let (service, store) = service();
        store
            .write(|records| {
                records.insert_debate(make_debate("expired", "alice", NOW - 10, NOW - 1));
                records.insert_debate(make_debate("live", "bob", NOW - 5, NOW + 1_000));
                Ok::<_, AppError>(())
            })
            .await
            .unwrap();

        let active = service.list(false, NOW).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "live");

        let all = service.list(true, NOW).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["live", "expired"]);
        assert_eq!(all[1].status, DebateStatus::Ended);
    }

    #[tokio::test]
    async fn test_get_refreshes_status() {
        let (service, store) = service();
        store
            .write(|records| {
                records.insert_debate(make_debate("d1", "alice", 0, NOW - 1));
                Ok::<_, AppError>(())
            })
            .await
            .unwrap();

        let debate = service.get("d1", NOW).await.unwrap();
        assert_eq!(debate.status, DebateStatus::Ended);

        let err = service.get("missing", NOW).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_refresh_statuses_idempotent() {
        let (service, store) = service();
        store
            .write(|records| {
                records.insert_debate(make_debate("d1", "alice", 0, NOW - 1));
                records.insert_debate(make_debate("d2", "bob", 0, NOW - 1));
                Ok::<_, AppError>(())
            })
            .await
            .unwrap();

        assert_eq!(service.refresh_statuses(NOW).await.unwrap(), 2);
        assert_eq!(service.refresh_statuses(NOW).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_creations_by_one_creator() {
        let (service, store) = service();

        let mut handles = vec![];
        for _ in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.create_debate(new_debate("alice"), NOW).await
            }));
        }

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(err) => assert!(matches!(err, AppError::BadRequest(_))),
            }
        }

        assert_eq!(created, 1);
        let stored = store.read(|records| records.debates().count()).await;
        assert_eq!(stored, 1);
    }
}
