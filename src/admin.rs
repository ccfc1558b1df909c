use crate::auth::SessionUser;
use crate::known_errors::KnownErrors;

pub async fn admin_panel(user: SessionUser) -> Result<&'static str, KnownErrors> {
    if !user.is_admin() {
        return Err(KnownErrors::Forbidden);
    }

    Ok("Welcome to the admin panel!")
}
