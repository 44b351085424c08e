//! # Todo repository
//!
//! Per-user todo rows: create, list, toggle, delete. Every mutation that
//! takes a todo id also takes the requester's id and refuses to touch rows
//! the requester does not own.
//!
//! [`toggle`] and [`delete`] share the same shape: load the row, compare
//! its `user_id` against the requester, then write. The check and the
//! write are separate statements; the window between them is accepted
//! (ownership never changes in this system, so nothing exercises it).

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Error, Result};
use crate::models::Todo;

/// Upper bound on todo content length, in characters. Matches the column
/// bound the schema was designed around.
pub const CONTENT_MAX_LEN: usize = 200;

/// Insert a new todo for `owner_id` and return its id.
///
/// Content is trimmed first; empty or over-long content is rejected with
/// [`Error::Validation`] before anything is persisted. New todos start
/// incomplete.
pub async fn add(pool: &SqlitePool, owner_id: i64, content: &str) -> Result<i64> {
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::Validation("todo content is required".into()));
    }
    if content.chars().count() > CONTENT_MAX_LEN {
        return Err(Error::Validation(format!(
            "todo content must be at most {CONTENT_MAX_LEN} characters"
        )));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO todos (content, completed, user_id, created_at) \
         VALUES ($1, 0, $2, $3) RETURNING id",
    )
    .bind(content)
    .bind(owner_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// All todos owned by `owner_id`, in insertion order.
pub async fn list_for_owner(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Todo>> {
    let todos = sqlx::query_as("SELECT * FROM todos WHERE user_id = $1 ORDER BY id")
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
    Ok(todos)
}

/// Look up a todo by id.
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Todo>> {
    let todo = sqlx::query_as("SELECT * FROM todos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(todo)
}

/// Flip the completion flag of a todo the requester owns.
pub async fn toggle(pool: &SqlitePool, id: i64, requester_id: i64) -> Result<Todo> {
    let todo = get(pool, id).await?.ok_or(Error::NotFound)?;
    if todo.user_id != requester_id {
        return Err(Error::Unauthorized);
    }

    let completed = !todo.completed;
    sqlx::query("UPDATE todos SET completed = $1 WHERE id = $2")
        .bind(completed)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(Todo { completed, ..todo })
}

/// Remove a todo the requester owns.
pub async fn delete(pool: &SqlitePool, id: i64, requester_id: i64) -> Result<()> {
    let todo = get(pool, id).await?.ok_or(Error::NotFound)?;
    if todo.user_id != requester_id {
        return Err(Error::Unauthorized);
    }

    sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::users;

    async fn user(pool: &SqlitePool, email: &str) -> i64 {
        users::create(pool, email, "secret1").await.unwrap()
    }

    #[tokio::test]
    async fn add_rejects_empty_and_overlong_content() {
        let pool = test_pool().await;
        let owner = user(&pool, "a@x.com").await;

        let empty = add(&pool, owner, "").await.unwrap_err();
        assert!(matches!(empty, Error::Validation(_)));

        let whitespace = add(&pool, owner, "   ").await.unwrap_err();
        assert!(matches!(whitespace, Error::Validation(_)));

        let long = "x".repeat(CONTENT_MAX_LEN + 1);
        let overlong = add(&pool, owner, &long).await.unwrap_err();
        assert!(matches!(overlong, Error::Validation(_)));

        assert!(list_for_owner(&pool, owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_accepts_content_at_the_bound() {
        let pool = test_pool().await;
        let owner = user(&pool, "a@x.com").await;

        let exact = "x".repeat(CONTENT_MAX_LEN);
        add(&pool, owner, &exact).await.unwrap();
    }

    #[tokio::test]
    async fn lifecycle_add_list_toggle_delete() {
        let pool = test_pool().await;
        let owner = user(&pool, "a@x.com").await;

        let id = add(&pool, owner, "buy milk").await.unwrap();

        let todos = list_for_owner(&pool, owner).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].content, "buy milk");
        assert!(!todos[0].completed);

        let toggled = toggle(&pool, id, owner).await.unwrap();
        assert!(toggled.completed);
        assert!(get(&pool, id).await.unwrap().unwrap().completed);

        let back = toggle(&pool, id, owner).await.unwrap();
        assert!(!back.completed);

        delete(&pool, id, owner).await.unwrap();
        assert!(get(&pool, id).await.unwrap().is_none());
        assert!(list_for_owner(&pool, owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_owner_and_insertion_ordered() {
        let pool = test_pool().await;
        let a = user(&pool, "a@x.com").await;
        let b = user(&pool, "b@x.com").await;

        add(&pool, a, "first").await.unwrap();
        add(&pool, b, "not yours").await.unwrap();
        add(&pool, a, "second").await.unwrap();

        let todos = list_for_owner(&pool, a).await.unwrap();
        let contents: Vec<_> = todos.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[tokio::test]
    async fn toggle_and_delete_refuse_non_owners() {
        let pool = test_pool().await;
        let a = user(&pool, "a@x.com").await;
        let b = user(&pool, "b@x.com").await;

        let id = add(&pool, a, "buy milk").await.unwrap();

        let toggle_err = toggle(&pool, id, b).await.unwrap_err();
        assert!(matches!(toggle_err, Error::Unauthorized));

        let delete_err = delete(&pool, id, b).await.unwrap_err();
        assert!(matches!(delete_err, Error::Unauthorized));

        // The row is untouched.
        let todo = get(&pool, id).await.unwrap().unwrap();
        assert_eq!(todo.content, "buy milk");
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let pool = test_pool().await;
        let a = user(&pool, "a@x.com").await;

        assert!(matches!(toggle(&pool, 999, a).await.unwrap_err(), Error::NotFound));
        assert!(matches!(delete(&pool, 999, a).await.unwrap_err(), Error::NotFound));
        assert!(get(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_user_cascades_to_their_todos() {
        let pool = test_pool().await;
        let a = user(&pool, "a@x.com").await;
        let b = user(&pool, "b@x.com").await;

        let id1 = add(&pool, a, "one").await.unwrap();
        let id2 = add(&pool, a, "two").await.unwrap();
        let kept = add(&pool, b, "keep").await.unwrap();

        users::delete(&pool, a).await.unwrap();

        assert!(get(&pool, id1).await.unwrap().is_none());
        assert!(get(&pool, id2).await.unwrap().is_none());
        assert!(get(&pool, kept).await.unwrap().is_some());
    }
}
