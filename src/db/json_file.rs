// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat JSON file persistence.
//!
//! Debates and users each live in one pretty-printed JSON array that is
//! rewritten wholesale. Writes go to a temporary sibling file which is then
//! renamed over the target, so a crash never leaves a half-written array.

use crate::db::{files, StoreError};
use crate::models::{Debate, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Locations of the two collection files.
#[derive(Debug, Clone)]
pub struct JsonFiles {
    debates_path: PathBuf,
    users_path: PathBuf,
}

impl JsonFiles {
    /// Use `data_dir`, creating it and empty collection files if needed.
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref();
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| StoreError::Io {
                path: dir.display().to_string(),
                source,
            })?;

        let this = Self {
            debates_path: dir.join(files::DEBATES),
            users_path: dir.join(files::USERS),
        };

        for path in [&this.debates_path, &this.users_path] {
            if !tokio::fs::try_exists(path)
                .await
                .map_err(|source| io_error(path, source))?
            {
                tracing::info!(path = %path.display(), "Initializing empty collection file");
                write_array::<Debate>(path, &[]).await?;
            }
        }

        Ok(this)
    }

    pub fn debates_path(&self) -> &Path {
        &self.debates_path
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    pub async fn load_debates(&self) -> Result<Vec<Debate>, StoreError> {
        read_array(&self.debates_path).await
    }

    pub async fn load_users(&self) -> Result<Vec<User>, StoreError> {
        read_array(&self.users_path).await
    }

    pub async fn save_debates(&self, debates: &[&Debate]) -> Result<(), StoreError> {
        write_array(&self.debates_path, debates).await
    }

    pub async fn save_users(&self, users: &[&User]) -> Result<(), StoreError> {
        write_array(&self.users_path, users).await
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

async fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| io_error(path, source))?;
    serde_json::from_slice(&data).map_err(|source| StoreError::Serde {
        path: path.display().to_string(),
        source,
    })
}

async fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let data = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Serde {
        path: path.display().to_string(),
        source,
    })?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    tokio::fs::write(&tmp_path, &data)
        .await
        .map_err(|source| io_error(&tmp_path, source))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|source| io_error(path, source))?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "Collection file written");
    Ok(())
}
