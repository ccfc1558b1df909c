use axum::extract::FromRef;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::Key;
use axum_extra::extract::cookie::SameSite;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde::Serialize;

use super::user::ADMIN_ROLE;
use crate::config::SessionConfig;
use crate::known_errors::KnownErrors;

pub const SESSION_COOKIE: &str = "session";

/// The slice of a user carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub role: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    fn encode(&self) -> Result<String, KnownErrors> {
        Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(self)?))
    }

    fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Writes `user_id` and `role` into the signed session cookie, replacing
/// whatever identity the client held before.
pub fn login(
    jar: SignedCookieJar,
    config: &SessionConfig,
    user_id: i64,
    role: &str,
) -> Result<SignedCookieJar, KnownErrors> {
    let value = SessionUser {
        user_id,
        role: Some(role.to_owned()),
    }
    .encode()?;

    let cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie);

    Ok(jar.add(cookie))
}

/// The identity in the cookie, if its signature checks out under this
/// process's key.
pub fn current_user(jar: &SignedCookieJar) -> Option<SessionUser> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| SessionUser::decode(cookie.value()))
}

pub fn is_authenticated(jar: &SignedCookieJar) -> bool {
    current_user(jar).is_some()
}

pub fn role(jar: &SignedCookieJar) -> Option<String> {
    current_user(jar).and_then(|user| user.role)
}

/// Taking a `SessionUser` as a handler argument makes the route require a
/// login; anonymous requests are redirected before the handler body runs.
impl<S> FromRequestParts<S> for SessionUser
where
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = KnownErrors;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match SignedCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        current_user(&jar).ok_or(KnownErrors::NotLoggedIn)
    }
}
