use clap::Parser;
use dotenvy::dotenv;
use taskdesk::AppState;
use taskdesk::auth::user;
use taskdesk::config::Cli;
use taskdesk::config::Command;
use taskdesk::config::SessionConfig;
use taskdesk::db;
use taskdesk::known_errors::KnownErrors;
use taskdesk::password;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), KnownErrors> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let pool = db::connect(&cli.database).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let addr = cli.serve.addr();
            // a new key per process, so restarting invalidates every session
            let session = SessionConfig::generate(cli.serve.secure_cookie);
            let app = taskdesk::app(AppState::new(pool, session));

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("listening on http://{}", &addr);
            axum::serve(listener, app.into_make_service()).await?;
        }
        Command::AddUser(args) => {
            let mut conn = pool.acquire().await?;
            let id = user::create_user(
                &mut conn,
                &args.username,
                &password::hash(&args.password),
                &args.role,
            )
            .await?;
            tracing::info!(user_id = id, role = %args.role, "user created");
        }
    }

    Ok(())
}
