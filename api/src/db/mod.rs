//! # Database module — SQLite pool and schema bootstrap
//!
//! The pool is created once by the binary and handed to every operation
//! explicitly; this module only knows how to open it and how to make sure
//! the schema exists.
//!
//! - [`connect`] — open a pool against a SQLite URL, creating the database
//!   file if missing and enabling foreign-key enforcement on every
//!   connection (cascade deletes depend on it).
//! - [`bootstrap`] — idempotent `CREATE TABLE IF NOT EXISTS` for the
//!   `users` and `todos` tables. Runs once on process start.

mod pool;

pub use pool::{bootstrap, connect};

#[cfg(test)]
pub(crate) use pool::test_pool;
