//! # Credential store
//!
//! Account creation and lookup for the `users` table, plus the one
//! authentication decision the service makes: [`authenticate`].
//!
//! Registration relies on the unique constraint on `email` as the source of
//! truth for duplicates — there is no check-then-insert sequence to race
//! against a concurrent registration. A constraint violation surfaces as
//! [`Error::DuplicateEmail`].
//!
//! [`authenticate`] collapses "no such user" and "wrong password" into the
//! single [`Error::AuthenticationFailed`], so a caller (and therefore a
//! client) cannot probe which of the two occurred.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::auth;
use crate::error::{Error, Result};
use crate::models::User;

/// Create a new account and return its id.
///
/// The plaintext password is hashed before the insert; only the PHC string
/// reaches the database.
pub async fn create(pool: &SqlitePool, email: &str, password: &str) -> Result<i64> {
    let password_hash = auth::hash_password(password)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, password_hash, created_at) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind(&password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => Error::DuplicateEmail,
        _ => Error::Database(e),
    })?;

    Ok(id)
}

/// Look up a user by email (case-sensitive, as stored).
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Look up a user by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Verify credentials and return the user on success.
///
/// Fails with [`Error::AuthenticationFailed`] whether the email is unknown
/// or the password is wrong.
pub async fn authenticate(pool: &SqlitePool, email: &str, password: &str) -> Result<User> {
    let Some(user) = find_by_email(pool, email).await? else {
        return Err(Error::AuthenticationFailed);
    };

    if !auth::verify_password(password, &user.password_hash)? {
        return Err(Error::AuthenticationFailed);
    }

    Ok(user)
}

/// Delete a user. Owned todos go with it via the cascade on
/// `todos.user_id`. Not routed by any handler; kept for structural
/// integrity and administrative use.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn create_stores_a_hash_not_the_plaintext() {
        let pool = test_pool().await;
        let id = create(&pool, "a@x.com", "secret1").await.unwrap();

        let user = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password_hash, "secret1");
        assert!(auth::verify_password("secret1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_fails_and_leaves_one_row() {
        let pool = test_pool().await;
        create(&pool, "a@x.com", "secret1").await.unwrap();

        let err = create(&pool, "a@x.com", "other-password").await.unwrap_err();
        assert!(matches!(err, Error::DuplicateEmail));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind("a@x.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn emails_are_case_sensitive_as_stored() {
        let pool = test_pool().await;
        create(&pool, "a@x.com", "secret1").await.unwrap();

        assert!(find_by_email(&pool, "A@X.COM").await.unwrap().is_none());
        assert!(find_by_email(&pool, "a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn authenticate_does_not_reveal_which_check_failed() {
        let pool = test_pool().await;
        create(&pool, "a@x.com", "secret1").await.unwrap();

        let unknown_email = authenticate(&pool, "b@x.com", "secret1").await.unwrap_err();
        let wrong_password = authenticate(&pool, "a@x.com", "secret2").await.unwrap_err();

        assert!(matches!(unknown_email, Error::AuthenticationFailed));
        assert!(matches!(wrong_password, Error::AuthenticationFailed));
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn authenticate_returns_the_user_on_success() {
        let pool = test_pool().await;
        let id = create(&pool, "a@x.com", "secret1").await.unwrap();

        let user = authenticate(&pool, "a@x.com", "secret1").await.unwrap();
        assert_eq!(user.id, id);
    }
}
