use anyhow::Result;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use uuid::Uuid;

use crate::models::profile::UserProfile;

use super::Database;

impl Database {
    /// Store an onboarding snapshot. Returns the row id.
    pub fn insert_profile(&self, profile: &UserProfile) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO profiles (id, created_at, snapshot) VALUES (?1, ?2, ?3)",
            params![
                id,
                Utc::now().to_rfc3339(),
                serde_json::to_string(profile)?
            ],
        )?;
        Ok(id)
    }

    /// Most recently stored profile snapshot, if any.
    pub fn latest_profile(&self) -> Result<Option<UserProfile>> {
        let snapshot: Option<String> = self
            .conn
            .query_row(
                "SELECT snapshot FROM profiles ORDER BY created_at DESC, id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        match snapshot {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }
}
