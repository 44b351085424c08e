//! Error taxonomy for the core operations.
//!
//! Every variant here is an expected, recoverable outcome: the HTTP layer
//! maps each one to a status code and a safe navigation target. Nothing in
//! this crate panics on them.

use thiserror::Error;

/// Errors returned by the credential store, session authenticator, and todo
/// repository.
#[derive(Debug, Error)]
pub enum Error {
    /// Registration with an email that already has an account. Detected via
    /// the unique constraint on `users.email`, not a prior existence check.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// A field failed validation before reaching the store.
    #[error("{0}")]
    Validation(String),

    /// No todo with the requested id.
    #[error("todo not found")]
    NotFound,

    /// The requester is authenticated but does not own the todo.
    #[error("not allowed to modify this todo")]
    Unauthorized,

    /// Bad credentials. Deliberately covers both "no such user" and "wrong
    /// password" so callers cannot tell them apart.
    #[error("invalid email or password")]
    AuthenticationFailed,

    /// A stored password hash could not be produced or parsed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// The session store failed to read or write session state.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
