use axum::extract::FromRef;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::Sqlite;
use sqlx::SqliteConnection;
use sqlx::SqlitePool;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use std::ops::Deref;
use std::ops::DerefMut;
use std::path::Path;

use crate::known_errors::KnownErrors;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role TEXT NOT NULL
    )
"#;

const CREATE_TASKS: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL,
        task TEXT NOT NULL
    )
"#;

/// Opens the database file, creating it and its tables when missing.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    sqlx::query(CREATE_USERS).execute(&pool).await?;
    sqlx::query(CREATE_TASKS).execute(&pool).await?;

    tracing::debug!(path = %path.display(), "database ready");

    Ok(pool)
}

/// A connection held for the lifetime of one request.
///
/// Handlers that take a `DbConn` get a connection acquired when the extractor
/// runs; it goes back to the pool when the handler's future is dropped, on
/// every exit path.
pub struct DbConn(PoolConnection<Sqlite>);

impl Deref for DbConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<S> FromRequestParts<S> for DbConn
where
    SqlitePool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = KnownErrors;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);
        Ok(DbConn(pool.acquire().await?))
    }
}
