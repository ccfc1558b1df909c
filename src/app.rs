use axum::Router;
use axum::extract::FromRef;
use axum::routing::get;
use axum::routing::post;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::auth::signin;
use crate::config::SessionConfig;
use crate::headers;
use crate::notfoundpage;
use crate::task;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session: SessionConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, session: SessionConfig) -> Self {
        Self { pool, session }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for SessionConfig {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session.key.clone()
    }
}

pub async fn index() -> &'static str {
    "Welcome to the Task Manager Application!"
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(signin::login_get).post(signin::login_post))
        .route("/dashboard", get(task::views::dashboard))
        .route("/add_task", post(task::commands::add_task))
        .route("/delete_task/{id}", get(task::commands::delete_task))
        .route("/admin", get(admin::admin_panel))
        .fallback(notfoundpage::not_found_page)
        .layer(headers::nosniff_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
