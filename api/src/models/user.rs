//! # User model
//!
//! Two representations of an account:
//!
//! ## [`User`]
//!
//! The complete row from the `users` table. It derives [`sqlx::FromRow`] so
//! it can be loaded directly from queries:
//!
//! - `id` — numeric surrogate key (SQLite rowid autoincrement).
//! - `email` — unique, stored and compared case-sensitively.
//! - `password_hash` — Argon2 PHC string; the plaintext is never stored.
//! - `created_at` — audit timestamp, written by the application.
//!
//! ## [`UserInfo`]
//!
//! The subset that may leave the server. It omits the password hash and the
//! timestamp; [`User::to_info`] produces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to [`UserInfo`] for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
}
