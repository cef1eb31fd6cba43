// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process record store with typed operations.
//!
//! All debates and users live behind one `RwLock`. Every mutation runs its
//! whole read-modify-write under the write guard, and in file-backed mode the
//! changed collection is written out before the guard is released. A failed
//! write restores the previous in-memory state.

use crate::db::{JsonFiles, StoreError};
use crate::models::{Debate, DebateStatus, User};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The full set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records {
    debates: HashMap<String, Debate>,
    users: HashMap<u64, User>,
}

impl Records {
    fn from_parts(
        debates: Vec<Debate>,
        users: Vec<User>,
        files: &JsonFiles,
    ) -> Result<Self, StoreError> {
        let mut records = Records::default();
        for debate in debates {
            if records.debates.contains_key(&debate.id) {
                return Err(StoreError::DuplicateId {
                    kind: "debate",
                    id: debate.id,
                    path: files.debates_path().display().to_string(),
                });
            }
            records.debates.insert(debate.id.clone(), debate);
        }
        for user in users {
            if records.users.contains_key(&user.fid) {
                return Err(StoreError::DuplicateId {
                    kind: "user",
                    id: user.fid.to_string(),
                    path: files.users_path().display().to_string(),
                });
            }
            records.users.insert(user.fid, user);
        }
        Ok(records)
    }

    // ─── Debates ─────────────────────────────────────────────────

    pub fn debate(&self, id: &str) -> Option<&Debate> {
        self.debates.get(id)
    }

    pub fn debate_mut(&mut self, id: &str) -> Option<&mut Debate> {
        self.debates.get_mut(id)
    }

    pub fn debates(&self) -> impl Iterator<Item = &Debate> {
        self.debates.values()
    }

    /// All debates, newest first (ties broken by id).
    pub fn debates_newest_first(&self) -> Vec<&Debate> {
        let mut debates: Vec<&Debate> = self.debates.values().collect();
        debates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        debates
    }

    pub fn insert_debate(&mut self, debate: Debate) {
        self.debates.insert(debate.id.clone(), debate);
    }

    /// Whether `creator` has a debate that is active at `now`.
    pub fn has_active_debate_for(&self, creator: &str, now: i64) -> bool {
        self.debates
            .values()
            .any(|d| d.created_by == creator && d.is_active(now))
    }

    /// Whether any active debate has passed its end time.
    pub fn refresh_due(&self, now: i64) -> bool {
        self.debates
            .values()
            .any(|d| d.status == DebateStatus::Active && d.ends_at <= now)
    }

    /// End every active debate whose end time has passed.
    ///
    /// Returns the number of debates that changed status.
    pub fn refresh_statuses(&mut self, now: i64) -> usize {
        let mut changed = 0;
        for debate in self.debates.values_mut() {
            if debate.refresh_status(now) {
                tracing::info!(debate_id = %debate.id, ends_at = debate.ends_at, "Debate ended");
                changed += 1;
            }
        }
        changed
    }

    // ─── Users ───────────────────────────────────────────────────

    pub fn user(&self, fid: u64) -> Option<&User> {
        self.users.get(&fid)
    }

    pub fn user_mut(&mut self, fid: u64) -> Option<&mut User> {
        self.users.get_mut(&fid)
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.fid, user);
    }

    fn users_by_fid(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by_key(|u| u.fid);
        users
    }

    fn debates_oldest_first(&self) -> Vec<&Debate> {
        let mut debates = self.debates_newest_first();
        debates.reverse();
        debates
    }
}

/// Shared handle to the record store.
#[derive(Clone)]
pub struct RecordStore {
    records: Arc<RwLock<Records>>,
    files: Option<Arc<JsonFiles>>,
}

impl RecordStore {
    /// Create an empty, volatile store.
    pub fn in_memory() -> Self {
        Self {
            records: Arc::new(RwLock::new(Records::default())),
            files: None,
        }
    }

    /// Open a file-backed store in `data_dir`, loading any existing records.
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let files = JsonFiles::open(data_dir).await?;
        let debates = files.load_debates().await?;
        let users = files.load_users().await?;
        let records = Records::from_parts(debates, users, &files)?;

        tracing::info!(
            debates = records.debates.len(),
            users = records.users.len(),
            path = %files.debates_path().display(),
            "Loaded records from disk"
        );

        Ok(Self {
            records: Arc::new(RwLock::new(records)),
            files: Some(Arc::new(files)),
        })
    }

    pub fn is_persistent(&self) -> bool {
        self.files.is_some()
    }

    /// Run `f` against a shared view of the records.
    pub async fn read<T>(&self, f: impl FnOnce(&Records) -> T) -> T {
        let guard = self.records.read().await;
        f(&*guard)
    }

    /// End expired debates, taking the write guard only when one is due.
    pub async fn refresh_statuses(&self, now: i64) -> Result<usize, StoreError> {
        if !self.read(|records| records.refresh_due(now)).await {
            return Ok(0);
        }
        self.write(|records| Ok(records.refresh_statuses(now))).await
    }

    /// Run a read-modify-write against the records.
    ///
    /// On success any changed collection is persisted while the write guard is
    /// still held. If `f` fails, changes it already made stay in memory and
    /// reach disk with the next successful write, so `f` may only make
    /// idempotent status refreshes before it decides to fail.
    pub async fn write<T, E>(&self, f: impl FnOnce(&mut Records) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self.records.write().await;

        let Some(files) = &self.files else {
            return f(&mut *guard);
        };

        let before = guard.clone();
        let value = f(&mut *guard)?;

        if let Err(e) = persist(files, &before, &*guard).await {
            tracing::error!(error = %e, "Failed to persist records, rolling back");
            *guard = before;
            return Err(e.into());
        }

        Ok(value)
    }
}

async fn persist(files: &JsonFiles, before: &Records, after: &Records) -> Result<(), StoreError> {
    if before.debates != after.debates {
        files.save_debates(&after.debates_oldest_first()).await?;
    }
    if before.users != after.users {
        files.save_users(&after.users_by_fid()).await?;
    }
    Ok(())
}
