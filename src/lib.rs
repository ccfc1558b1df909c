pub mod admin;
pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod headers;
pub mod known_errors;
pub mod notfoundpage;
pub mod password;
pub mod task;
pub mod theme;

pub use app::AppState;
pub use app::app;
