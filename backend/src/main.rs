//! Supply Chain Dashboard - command-line front end
//!
//! Signs in with one of the mock roles, persists the session between runs
//! and renders the dashboard pages as text.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scd_backend::handlers;
use scd_backend::routes::{self, PageQuery};
use scd_backend::{AppState, Config};
use shared::Pagination;

#[derive(Parser, Debug)]
#[command(name = "scd", version, about = "Role-based supply chain dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in as admin, supplier, distributor or retailer
    Signin { role: String },
    /// Sign out and forget the persisted session
    Signout,
    /// Show the signed-in user
    Whoami,
    /// Render the page at a path
    Open {
        #[arg(default_value = "/")]
        path: String,
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show the sidebar for the current session
    Nav,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Help and usage errors must not depend on a loadable config
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // Logs go to stderr so page output stays clean
    let json_logs = std::env::var("SCD_LOG_FORMAT").is_ok_and(|format| format == "json");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scd=info,scd_backend=info".into()),
        )
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let config = Config::load()?;
    tracing::debug!(environment = %config.environment, "Configuration loaded");

    let state = AppState::from_config(config)?;

    match cli.command {
        Command::Signin { role } => match handlers::auth::sign_in(&state, &role).await {
            Ok(message) => println!("{message}"),
            Err(e) => {
                eprintln!("{}", e.detail().message);
                std::process::exit(1);
            }
        },
        Command::Signout => println!("{}", handlers::auth::sign_out(&state).await),
        Command::Whoami => println!("{}", handlers::auth::whoami(&state)),
        Command::Open {
            path,
            search,
            page,
            per_page,
        } => {
            let query = PageQuery {
                search,
                pagination: Pagination::new(
                    page,
                    per_page.unwrap_or(state.config.display.per_page),
                ),
            };
            let rendered = routes::open(&state, &path, &query)?;
            if let Some(from) = &rendered.redirected_from {
                eprintln!("{from} requires a session, showing {}", rendered.route.path);
            }
            println!("{}", rendered.body);
        }
        Command::Nav => {
            let user = state.session.user();
            println!("{}", handlers::navigation::sidebar(user.as_ref(), None));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_needs_no_config() {
        std::env::set_var("SCD__DISPLAY__PER_PAGE", "not a number");
        let err = Cli::try_parse_from(["scd", "--help"]).unwrap_err();
        std::env::remove_var("SCD__DISPLAY__PER_PAGE");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_open_defaults() {
        let cli = Cli::try_parse_from(["scd", "open"]).unwrap();
        match cli.command {
            Command::Open {
                path,
                search,
                page,
                per_page,
            } => {
                assert_eq!(path, "/");
                assert_eq!(search, None);
                assert_eq!(page, 1);
                assert_eq!(per_page, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
