use sqlx::SqliteConnection;
use sqlx::prelude::FromRow;
use std::fmt;

use crate::known_errors::KnownErrors;

pub const ADMIN_ROLE: &str = "admin";
pub const DEFAULT_ROLE: &str = "user";

#[derive(Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    password: String,
    pub role: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("role", &self.role)
            .finish()
    }
}

/// Looks up the user whose name and password digest both match.
///
/// Both values are bound as parameters; nothing from the request is spliced
/// into the statement text.
pub async fn find_user(
    conn: &mut SqliteConnection,
    username: &str,
    password_digest: &str,
) -> Result<Option<User>, KnownErrors> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, role FROM users
        WHERE username = ? AND password = ?
        "#,
    )
    .bind(username)
    .bind(password_digest)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(user)
}

/// Inserts a user row. There is no web route for this; it backs the
/// `add-user` command and test fixtures.
pub async fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    password_digest: &str,
    role: &str,
) -> Result<i64, KnownErrors> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password, role)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(username)
    .bind(password_digest)
    .bind(role)
    .execute(&mut *conn)
    .await;

    match result {
        Ok(done) => Ok(done.last_insert_rowid()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(KnownErrors::UserExists {
            username: username.to_owned(),
        }),
        Err(e) => Err(e.into()),
    }
}
