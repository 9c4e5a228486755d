//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::records::DocumentKind;

/// Dashboard command arguments.
#[derive(Debug, Args)]
pub struct DashboardCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Maintainer management commands.
#[derive(Debug, Subcommand)]
pub enum MaintainerCommand {
    /// List all maintainers
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Delete a maintainer (asks for confirmation)
    Delete {
        /// Maintainer id (student number)
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show which requirement documents a maintainer has on file
    Requirements {
        /// Maintainer id (student number)
        id: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Open a maintainer's document with the default application
    Open {
        /// Maintainer id (student number)
        id: String,

        /// Which document to open
        #[arg(value_enum)]
        document: DocumentArg,
    },
}

/// Applicant management commands.
#[derive(Debug, Subcommand)]
pub enum ApplicantCommand {
    /// List all applicants
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Delete an applicant (asks for confirmation)
    Delete {
        /// Applicant id
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Database commands.
#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the database file and schema (explicit bootstrap)
    Init {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the database file path
    Path,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Document kind argument for the open command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentArg {
    /// Certificate of Registration
    Cor,
    /// Transcript of Records
    Tor,
    /// Good Moral Certificate
    GoodMoral,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Cor => Self::Registration,
            DocumentArg::Tor => Self::Transcript,
            DocumentArg::GoodMoral => Self::GoodMoral,
        }
    }
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_arg_conversion() {
        assert_eq!(
            DocumentKind::from(DocumentArg::Cor),
            DocumentKind::Registration
        );
        assert_eq!(
            DocumentKind::from(DocumentArg::Tor),
            DocumentKind::Transcript
        );
        assert_eq!(
            DocumentKind::from(DocumentArg::GoodMoral),
            DocumentKind::GoodMoral
        );
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_maintainer_command_debug() {
        let cmd = MaintainerCommand::Delete {
            id: "21-0001".to_string(),
            yes: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Delete"));
        assert!(debug_str.contains("21-0001"));
    }

    #[test]
    fn test_dashboard_command_debug() {
        let cmd = DashboardCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_db_command_debug() {
        let cmd = DbCommand::Init { yes: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Init"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_document_arg_clone() {
        let arg = DocumentArg::Tor;
        let cloned = arg;
        assert_eq!(arg, cloned);
    }
}
