//! Router construction and server launch.

use anyhow::Context as _;
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::handlers;
use crate::settings::Settings;

/// Everything handlers need, passed explicitly via router state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub remember_days: i64,
}

/// The route table, built once at startup.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::add))
        .route("/me", get(handlers::me))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", get(handlers::logout))
        .route("/toggle/{id}", get(handlers::toggle))
        .route("/delete/{id}", get(handlers::delete))
        .with_state(state)
}

/// Launch the server with a session store for authentication.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    anyhow::ensure!(
        settings.session.secret.len() >= 32,
        "session.secret must be at least 32 bytes"
    );

    let pool = api::db::connect(&settings.database.url)
        .await
        .context("failed to open the database")?;
    api::db::bootstrap(&pool).await?;

    // Sessions live next to the data in the same SQLite file; the cookie
    // holds only a signed, opaque session id.
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(Key::derive_from(settings.session.secret.as_bytes()));

    let state = AppState {
        pool,
        remember_days: settings.session.remember_days,
    };
    let app = router(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
