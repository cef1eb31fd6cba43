//! User directory: lookup and create-or-update.

use crate::db::RecordStore;
use crate::error::{AppError, Result};
use crate::models::{User, UserUpdate};

/// Reads and upserts user profiles.
#[derive(Clone)]
pub struct UsersService {
    store: RecordStore,
}

impl UsersService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, fid: u64) -> Result<User> {
        self.store
            .read(|records| records.user(fid).cloned())
            .await
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", fid)))
    }

    /// Insert the user, or merge the update into the existing record.
    pub async fn upsert(&self, fid: u64, update: UserUpdate) -> Result<User> {
        if update.username.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Missing required field: username".to_string(),
            ));
        }

        let (user, created) = self
            .store
            .write(|records| {
                if let Some(existing) = records.user_mut(fid) {
                    existing.apply(update);
                    return Ok::<_, AppError>((existing.clone(), false));
                }
                let user = User::from_update(fid, update);
                records.insert_user(user.clone());
                Ok((user, true))
            })
            .await?;

        tracing::info!(fid, username = %user.username, created, "User upserted");
        Ok(user)
    }
}
