//! Command-line interface for grantdesk.
//!
//! This module provides the CLI structure for the `grantdesk` binary. Each
//! subcommand is a "screen" of the console; all of them share one store
//! connection opened at startup.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ApplicantCommand, ConfigCommand, DashboardCommand, DbCommand, DocumentArg, MaintainerCommand,
    OutputFormat,
};

/// grantdesk - scholarship program administrative console
///
/// Lists, views, and deletes maintainer and applicant records against a
/// local scholarship database, renders an aggregate dashboard, and opens
/// maintainers' requirement documents with the platform's default
/// application.
#[derive(Debug, Parser)]
#[command(name = "grantdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the aggregate dashboard
    Dashboard(DashboardCommand),

    /// Manage maintainers
    #[command(subcommand)]
    Maintainers(MaintainerCommand),

    /// Manage applicants
    #[command(subcommand)]
    Applicants(ApplicantCommand),

    /// Manage the database file
    #[command(subcommand)]
    Db(DbCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "grantdesk");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Dashboard(DashboardCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: Command::Dashboard(DashboardCommand { json: false }),
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_dashboard() {
        let args = vec!["grantdesk", "dashboard"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Dashboard(_)));
    }

    #[test]
    fn test_parse_dashboard_json() {
        let args = vec!["grantdesk", "dashboard", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Dashboard(DashboardCommand { json: true })
        ));
    }

    #[test]
    fn test_parse_maintainers_list() {
        let args = vec!["grantdesk", "maintainers", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Maintainers(MaintainerCommand::List { .. })
        ));
    }

    #[test]
    fn test_parse_maintainers_delete_with_yes() {
        let args = vec!["grantdesk", "maintainers", "delete", "21-0001", "--yes"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Maintainers(MaintainerCommand::Delete { id, yes }) => {
                assert_eq!(id, "21-0001");
                assert!(yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_maintainers_open() {
        let args = vec!["grantdesk", "maintainers", "open", "21-0001", "tor"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Maintainers(MaintainerCommand::Open { id, document }) => {
                assert_eq!(id, "21-0001");
                assert_eq!(document, DocumentArg::Tor);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_applicants_list() {
        let args = vec!["grantdesk", "applicants", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Applicants(ApplicantCommand::List { .. })
        ));
    }

    #[test]
    fn test_parse_db_init() {
        let args = vec!["grantdesk", "db", "init", "--yes"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Db(DbCommand::Init { yes: true })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["grantdesk", "-c", "/custom/config.toml", "dashboard"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["grantdesk", "-v", "dashboard"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }
}
