pub mod session;
pub mod signin;
pub mod user;

pub use session::SessionUser;
