//! # API crate — core of the todo list service
//!
//! Everything the HTTP layer needs that is not routing: credential storage,
//! password hashing, session resolution, and the per-user todo repository.
//! The `server` crate consumes these contracts and nothing else.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2 password hashing/verification and session sign-in/out/resolution |
//! | [`db`] | SQLite connection pool and idempotent schema bootstrap |
//! | [`error`] | The recoverable error taxonomy shared by every operation |
//! | [`models`] | Database rows (`User`, `Todo`) and their client-safe projections |
//! | [`todos`] | Todo repository: add, list, get, toggle, delete — owner-checked |
//! | [`users`] | Credential store: create, lookup, authenticate, delete |
//!
//! Every operation takes the connection pool explicitly; there is no
//! process-global handle. The caller creates the pool once at startup and
//! threads it through.

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod todos;
pub mod users;

pub use error::{Error, Result};
pub use models::{Todo, TodoInfo, User, UserInfo};
