use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use axum_extra::extract::cookie::Key;

use crate::auth::user::DEFAULT_ROLE;

/// Task manager web application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(
        short,
        long,
        global = true,
        env = "TASKDESK_DATABASE",
        default_value = "database.db"
    )]
    pub database: PathBuf,

    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the web server (default if no subcommand given)
    Serve,

    /// Insert a user row; there is no sign-up page
    AddUser(AddUserArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, global = true, env = "TASKDESK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(long, global = true, env = "TASKDESK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Only send the session cookie over HTTPS
    #[arg(long, global = true, env = "TASKDESK_SECURE_COOKIE")]
    pub secure_cookie: bool,
}

impl ServeArgs {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Args, Debug, Clone)]
pub struct AddUserArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    #[arg(long, default_value = DEFAULT_ROLE)]
    pub role: String,
}

/// How the session cookie is signed and scoped.
#[derive(Clone)]
pub struct SessionConfig {
    pub key: Key,
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// A fresh random signing key. Cookies signed with it stop verifying once
    /// the process exits.
    pub fn generate(secure_cookie: bool) -> Self {
        Self {
            key: Key::generate(),
            secure_cookie,
        }
    }

    pub fn with_key(key: Key) -> Self {
        Self {
            key,
            secure_cookie: false,
        }
    }
}
