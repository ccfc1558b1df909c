use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use thiserror::Error;

pub const LOGIN_URL: &str = "/login";

#[derive(Error, Debug)]
pub enum KnownErrors {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Role is not allowed on this route")]
    Forbidden,

    #[error("Username {username} is already taken")]
    UserExists { username: String },

    #[error("Invalid form: {0}")]
    InvalidForm(#[from] FormRejection),

    #[error("Task id {0} is out of range")]
    InvalidTaskId(u64),

    #[error("Session cookie could not be encoded: {0}")]
    SessionEncoding(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for KnownErrors {
    fn into_response(self) -> Response {
        match self {
            // a missing role looks exactly like a missing login
            KnownErrors::NotLoggedIn | KnownErrors::Forbidden => {
                Redirect::to(LOGIN_URL).into_response()
            }
            KnownErrors::InvalidForm(rejection) => rejection.into_response(),
            KnownErrors::InvalidTaskId(_) => {
                (StatusCode::BAD_REQUEST, "Invalid task id").into_response()
            }
            KnownErrors::UserExists { .. } => {
                (StatusCode::CONFLICT, "Username already taken").into_response()
            }
            e @ (KnownErrors::SessionEncoding(_)
            | KnownErrors::Database(_)
            | KnownErrors::Io(_)) => {
                tracing::error!(error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
