//! CLI argument parsing

mod notification;
mod variable;
mod workspace;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{defaults, env};
use crate::error::{Result, TfeError};

pub use notification::{
    DestinationType, NotificationAction, NotificationCreateArgs, NotificationDeleteArgs,
    NotificationListArgs,
};
pub use variable::{
    VariableAction, VariableCreateArgs, VariableDeleteArgs, VariableListArgs, VariableParseArgs,
};
pub use workspace::{WorkspaceAction, WsCreateArgs, WsDeleteArgs, WsListArgs};

/// Manage TFE from the command line
#[derive(Parser, Debug)]
#[command(name = "tfe")]
#[command(version)]
#[command(about = "Manage TFE from the command line.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Organization name
    #[arg(short = 'o', long, global = true, env = env::ORG)]
    pub organization: Option<String>,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long = "tfe-token", global = true)]
    pub tfe_token: Option<String>,

    /// TFE host
    #[arg(short = 'H', long, global = true, env = env::HOST, default_value = defaults::HOST)]
    pub host: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        env = env::LOG_LEVEL,
        default_value = defaults::LOG_LEVEL
    )]
    pub log_level: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Organization from --organization or TFE_ORG
    pub fn organization(&self) -> Result<&str> {
        self.organization
            .as_deref()
            .filter(|org| !org.is_empty())
            .ok_or_else(|| {
                TfeError::Config(format!(
                    "no organization specified (use --organization or {})",
                    env::ORG
                ))
            })
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage TFE workspaces
    #[command(visible_alias = "ws")]
    Workspace {
        #[command(subcommand)]
        action: WorkspaceAction,
    },

    /// Manage TFE variables
    #[command(visible_alias = "var")]
    Variable {
        #[command(subcommand)]
        action: VariableAction,
    },

    /// Manage TFE notifications
    #[command(visible_alias = "notif")]
    Notification {
        #[command(subcommand)]
        action: NotificationAction,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
