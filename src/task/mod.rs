pub mod commands;
pub mod views;

use sqlx::SqliteConnection;
use sqlx::prelude::FromRow;

use crate::known_errors::KnownErrors;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub task: String,
}

/// Tasks owned by `user_id`, oldest first.
pub async fn list_tasks(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<Task>, KnownErrors> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, task FROM tasks
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(tasks)
}

pub async fn insert_task(
    conn: &mut SqliteConnection,
    user_id: i64,
    text: &str,
) -> Result<i64, KnownErrors> {
    let done = sqlx::query(
        r#"
        INSERT INTO tasks (user_id, task)
        VALUES (?, ?)
        "#,
    )
    .bind(user_id)
    .bind(text)
    .execute(&mut *conn)
    .await?;

    Ok(done.last_insert_rowid())
}

/// Deletes a task by id regardless of who owns it. Returns the number of rows
/// removed, which is zero for an unknown id.
pub async fn delete_task(conn: &mut SqliteConnection, task_id: i64) -> Result<u64, KnownErrors> {
    let done = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(task_id)
        .execute(&mut *conn)
        .await?;

    Ok(done.rows_affected())
}
