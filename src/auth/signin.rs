use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum_extra::extract::SignedCookieJar;
use maud::Markup;
use maud::html;
use serde::Deserialize;

use super::session;
use super::user;
use crate::config::SessionConfig;
use crate::db::DbConn;
use crate::known_errors::KnownErrors;
use crate::password;
use crate::theme;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials!";

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

fn login_page() -> Markup {
    theme::page(
        Some("Login"),
        html! {
            form method="post" action="/login" {
                "Username: "
                input type="text" name="username" autocomplete="username";
                br;
                "Password: "
                input type="password" name="password" autocomplete="current-password";
                br;
                input type="submit" value="Login";
            }
        },
    )
}

pub async fn login_get() -> Markup {
    login_page()
}

pub async fn login_post(
    State(config): State<SessionConfig>,
    jar: SignedCookieJar,
    mut db: DbConn,
    Form(form): Form<LoginForm>,
) -> Result<Response, KnownErrors> {
    let digest = password::hash(&form.password);

    match user::find_user(&mut db, &form.username, &digest).await? {
        Some(user) => {
            let jar = session::login(jar, &config, user.id, &user.role)?;
            tracing::info!(user_id = user.id, "login succeeded");
            Ok((jar, Redirect::to("/dashboard")).into_response())
        }
        None => {
            // credentials never reach the log
            tracing::info!("login rejected");
            Ok(INVALID_CREDENTIALS.into_response())
        }
    }
}
