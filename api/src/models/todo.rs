//! # Todo model
//!
//! [`Todo`] is the full `todos` row: content, completion flag, and the
//! owning user's id. The foreign key carries `ON DELETE CASCADE`, so rows
//! disappear with their owner.
//!
//! [`TodoInfo`] is the client-facing projection — the owner id stays
//! server-side, since every listing is already scoped to its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full todo record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Convert to [`TodoInfo`] for client consumption.
    pub fn to_info(&self) -> TodoInfo {
        TodoInfo {
            id: self.id,
            content: self.content.clone(),
            completed: self.completed,
        }
    }
}

/// Todo information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoInfo {
    pub id: i64,
    pub content: String,
    pub completed: bool,
}
