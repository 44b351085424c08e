//! # Request handlers
//!
//! The consumer layer over the `api` contracts. Each handler resolves the
//! current user once (where required), calls into the credential store or
//! todo repository, and maps the outcome to an HTTP response:
//!
//! - success → `303 See Other` to the canonical view (POST-redirect-GET),
//!   except the list view, which returns the todos as JSON;
//! - a request that needs a login → `303` to `/login?next=<original path>`,
//!   resumed after a successful login;
//! - every expected failure → its status code with a JSON `{"error": …}`
//!   body. Internal failures are logged and never leak detail.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tower_sessions::Session;

use api::{auth, todos, users, Error, TodoInfo, User, UserInfo};

use crate::application::AppState;
use crate::forms::{LoginForm, RegisterForm, TodoForm};

/// Handler-level error: either the login gate fired, or a core operation
/// returned one of its expected outcomes.
#[derive(Debug)]
pub enum AppError {
    /// Anonymous request to an auth-gated route. Carries the path to
    /// return to after login.
    LoginRequired { next: String },
    Api(Error),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self::Api(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRequired { next } => {
                let target = format!("/login?next={}", urlencoding::encode(&next));
                Redirect::to(&target).into_response()
            }
            Self::Api(err) => {
                let status = match &err {
                    Error::DuplicateEmail => StatusCode::CONFLICT,
                    Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    Error::NotFound => StatusCode::NOT_FOUND,
                    Error::Unauthorized => StatusCode::FORBIDDEN,
                    Error::AuthenticationFailed => StatusCode::UNAUTHORIZED,
                    Error::PasswordHash(_) | Error::Session(_) | Error::Database(_) => {
                        tracing::error!(error = %err, "internal error");
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({ "error": "internal server error" })),
                        )
                            .into_response();
                    }
                };
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
        }
    }
}

/// Resolve the current user or fire the login gate with a return hint.
async fn require_user(session: &Session, pool: &SqlitePool, next: &str) -> Result<User, AppError> {
    match auth::current_user(session, pool).await? {
        Some(user) => Ok(user),
        None => Err(AppError::LoginRequired { next: next.to_string() }),
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// `GET /` — the current user's todos, in insertion order.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<TodoInfo>>, AppError> {
    let user = require_user(&session, &state.pool, uri.path()).await?;
    let todos = todos::list_for_owner(&state.pool, user.id).await?;
    Ok(Json(todos.iter().map(|t| t.to_info()).collect()))
}

/// `GET /me` — the current account, or `null` when anonymous.
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Option<UserInfo>>, AppError> {
    let user = auth::current_user(&session, &state.pool).await?;
    Ok(Json(user.map(|u| u.to_info())))
}

/// `POST /` — add a todo for the current user.
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    axum::Form(form): axum::Form<TodoForm>,
) -> Result<Redirect, AppError> {
    let user = require_user(&session, &state.pool, uri.path()).await?;
    todos::add(&state.pool, user.id, &form.content).await?;
    Ok(Redirect::to("/"))
}

/// `POST /register` — create an account, then send the user to log in.
pub async fn register(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    let email = form.validate()?;
    let user_id = users::create(&state.pool, &email, &form.password).await?;
    tracing::info!(user_id, "registered new account");
    Ok(Redirect::to("/login"))
}

/// `POST /login` — verify credentials, establish the session, and resume
/// at `next` when one was carried through the login gate.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<NextQuery>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let email = form.validate()?;
    let user = users::authenticate(&state.pool, &email, &form.password).await?;
    auth::sign_in(&session, &user, form.remember(), state.remember_days).await?;
    tracing::debug!(user_id = user.id, "logged in");

    // Only resume at local paths; anything else falls back to the list.
    let target = query
        .next
        .as_deref()
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or("/");
    Ok(Redirect::to(target))
}

/// `GET /logout` — destroy the session. A no-op for anonymous callers.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    auth::sign_out(&session).await?;
    Ok(Redirect::to("/login"))
}

/// `GET /toggle/{id}` — flip completion on a todo the current user owns.
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let user = require_user(&session, &state.pool, uri.path()).await?;
    todos::toggle(&state.pool, id, user.id).await?;
    Ok(Redirect::to("/"))
}

/// `GET /delete/{id}` — delete a todo the current user owns.
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let user = require_user(&session, &state.pool, uri.path()).await?;
    todos::delete(&state.pool, id, user.id).await?;
    Ok(Redirect::to("/"))
}
