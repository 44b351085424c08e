//! # Session state — sign-in, sign-out, and per-request user resolution
//!
//! The session record stores exactly one piece of identity: the user id,
//! under [`SESSION_USER_ID_KEY`]. The cookie the client holds is an opaque,
//! signed session id; the id-to-user mapping lives server-side in the
//! session store.
//!
//! A request is **Anonymous** until [`current_user`] resolves the stored id
//! through the credential store, and falls back to Anonymous whenever the
//! cookie is absent, unknown to the store, or points at a user that no
//! longer exists. Handlers call this once per request and pass the result
//! down explicitly.

use sqlx::SqlitePool;
use time::Duration;
use tower_sessions::{Expiry, Session};

use crate::error::Result;
use crate::models::User;
use crate::users;

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Resolve the current user from the session, loading the row by id.
///
/// Returns `Ok(None)` for anonymous requests: no id in the session, or an
/// id whose user row has been deleted since the session was issued.
pub async fn current_user(session: &Session, pool: &SqlitePool) -> Result<Option<User>> {
    let Some(user_id) = session.get::<i64>(SESSION_USER_ID_KEY).await? else {
        return Ok(None);
    };
    users::find_by_id(pool, user_id).await
}

/// Establish a logged-in session for `user`.
///
/// By default the session lives as long as the browsing session (the
/// layer's `Expiry::OnSessionEnd`). With `remember` set, the expiry is
/// switched to a long inactivity window so the login outlives the browser.
pub async fn sign_in(session: &Session, user: &User, remember: bool, remember_days: i64) -> Result<()> {
    session.insert(SESSION_USER_ID_KEY, user.id).await?;
    if remember {
        session.set_expiry(Some(Expiry::OnInactivity(Duration::days(remember_days))));
    }
    Ok(())
}

/// Destroy the session: store record and cookie. A no-op when anonymous.
pub async fn sign_out(session: &Session) -> Result<()> {
    session.flush().await?;
    Ok(())
}
