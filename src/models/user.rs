//! User model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User profile, keyed by Farcaster ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Farcaster ID
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub fid: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub total_debates: u32,
    #[serde(default)]
    pub total_votes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_rate: Option<f64>,
}

/// Partial user update; absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub total_debates: Option<u32>,
    pub total_votes: Option<u32>,
    pub win_rate: Option<f64>,
}

impl User {
    /// Build a new user from an update, defaulting missing stats to zero.
    pub fn from_update(fid: u64, update: UserUpdate) -> Self {
        Self {
            fid,
            username: update.username,
            display_name: update.display_name,
            avatar: update.avatar,
            total_debates: update.total_debates.unwrap_or(0),
            total_votes: update.total_votes.unwrap_or(0),
            win_rate: update.win_rate,
        }
    }

    /// Merge an update into this record.
    pub fn apply(&mut self, update: UserUpdate) {
        self.username = update.username;
        if let Some(display_name) = update.display_name {
            self.display_name = Some(display_name);
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(total_debates) = update.total_debates {
            self.total_debates = total_debates;
        }
        if let Some(total_votes) = update.total_votes {
            self.total_votes = total_votes;
        }
        if let Some(win_rate) = update.win_rate {
            self.win_rate = Some(win_rate);
        }
    }
}
