use axum::Form;
use axum::extract::Path;
use axum::extract::rejection::FormRejection;
use axum::response::Redirect;
use serde::Deserialize;

use crate::auth::SessionUser;
use crate::db::DbConn;
use crate::known_errors::KnownErrors;

const CALLBACK_URL: &str = "/dashboard";

#[derive(Deserialize)]
pub struct AddTaskForm {
    task: String,
}

/// The form is taken as a `Result` so the login check above it decides the
/// response before a malformed body can.
pub async fn add_task(
    user: SessionUser,
    mut db: DbConn,
    form: Result<Form<AddTaskForm>, FormRejection>,
) -> Result<Redirect, KnownErrors> {
    let Form(form) = form?;

    let task_id = super::insert_task(&mut db, user.user_id, &form.task).await?;
    tracing::info!(user_id = user.user_id, task_id, "task added");

    Ok(Redirect::to(CALLBACK_URL))
}

/// Deletes any task by id. Ownership is not checked, so a logged-in user can
/// remove another user's task.
///
/// Signed ids such as `-1` are rejected by the path extractor.
pub async fn delete_task(
    Path(task_id): Path<u64>,
    user: SessionUser,
    mut db: DbConn,
) -> Result<Redirect, KnownErrors> {
    let task_id = i64::try_from(task_id).map_err(|_| KnownErrors::InvalidTaskId(task_id))?;
    let removed = super::delete_task(&mut db, task_id).await?;
    tracing::info!(user_id = user.user_id, task_id, removed, "task deleted");

    Ok(Redirect::to(CALLBACK_URL))
}
