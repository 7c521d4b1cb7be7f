//! CLI module for the discount board backend
//!
//! - `serve`: run the HTTP server (default)
//! - `check`: verify configuration and database connectivity, then exit

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Discount Board - accounts and discount listings over HTTP
#[derive(Parser)]
#[command(name = "discount-board")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP server (default mode)
    #[default]
    Serve,

    /// Connect to the configured database and exit
    Check,
}

/// Load `.env`, configuration and logging shared by every subcommand
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["discount-board"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Serve);
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["discount-board", "check"]).unwrap();
        assert_eq!(cli.command, Some(Command::Check));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["discount-board", "ui"]).is_err());
    }
}
