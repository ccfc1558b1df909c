use maud::Markup;
use maud::html;

use super::Task;
use crate::auth::SessionUser;
use crate::db::DbConn;
use crate::known_errors::KnownErrors;
use crate::theme;

fn dashboard_page(user_id: i64, tasks: &[Task]) -> Markup {
    theme::page(
        Some("Dashboard"),
        html! {
            h1 { "Welcome, user " (user_id) "!" }
            form action="/add_task" method="post" {
                input type="text" name="task" placeholder="New task";
                br;
                input type="submit" value="Add Task";
            }
            h2 { "Your Tasks" }
            ul {
                @for task in tasks {
                    li {
                        (task.task) " "
                        a href=(format!("/delete_task/{}", task.id)) { "Delete" }
                    }
                }
            }
        },
    )
}

pub async fn dashboard(user: SessionUser, mut db: DbConn) -> Result<Markup, KnownErrors> {
    let tasks = super::list_tasks(&mut db, user.user_id).await?;
    Ok(dashboard_page(user.user_id, &tasks))
}
