use std::path::PathBuf;

use anyhow::Result;
use capx_db_sqlite::Connections;
use clap::{Parser, Subcommand};

mod config;

#[derive(Parser)]
#[command(name = "capx", version, about = "CapX skills and capacity exchange")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Manage the staff role of accounts
    Staff {
        #[command(subcommand)]
        command: StaffCommand,
    },
}

#[derive(Subcommand)]
enum StaffCommand {
    Grant { username: String },
    Revoke { username: String },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(cli.config.as_ref())?;
    if let Some(db_url) = cli.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    capx_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = capx_webserver::Cfg {
                token_valid_for: cfg.auth.token_valid_for,
                token_secret: cfg.auth.secret,
            };
            let enable_cors = cli.enable_cors || cfg.webserver.enable_cors;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(capx_webserver::run(
                connections,
                enable_cors,
                web_cfg,
                env!("CARGO_PKG_VERSION"),
            ));
        }
        Command::Staff { command } => {
            let (username, is_staff) = match command {
                StaffCommand::Grant { username } => (username, true),
                StaffCommand::Revoke { username } => (username, false),
            };
            let account =
                capx_application::prelude::change_staff_status(&connections, &username, is_staff)?;
            println!(
                "{} (id = {}) is_staff = {}",
                account.username, account.id, account.is_staff
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_staff_command() {
        let cli = Cli::parse_from(["capx", "--db-url", ":memory:", "staff", "grant", "alice"]);
        assert_eq!(Some(":memory:"), cli.db_url.as_deref());
        assert!(matches!(
            cli.command,
            Some(Command::Staff {
                command: StaffCommand::Grant { ref username }
            }) if username == "alice"
        ));
    }
}
