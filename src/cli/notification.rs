//! Notification command arguments

use clap::{Parser, Subcommand, ValueEnum};

/// Actions for the 'notification' command
#[derive(Subcommand, Debug)]
pub enum NotificationAction {
    /// List TFE notifications for a specific workspace
    #[command(visible_alias = "ls")]
    List(NotificationListArgs),

    /// Create a TFE notification (or update it with --force)
    Create(NotificationCreateArgs),

    /// Delete a TFE notification
    #[command(visible_alias = "rm")]
    Delete(NotificationDeleteArgs),
}

/// Notification destination types accepted by TFE
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DestinationType {
    /// Generic webhook
    Generic,
    /// Email to organization members
    Email,
    /// Slack incoming webhook
    Slack,
    /// Microsoft Teams incoming webhook
    MicrosoftTeams,
}

impl std::fmt::Display for DestinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestinationType::Generic => write!(f, "generic"),
            DestinationType::Email => write!(f, "email"),
            DestinationType::Slack => write!(f, "slack"),
            DestinationType::MicrosoftTeams => write!(f, "microsoft-teams"),
        }
    }
}

/// Arguments for 'notification list'
#[derive(Parser, Debug)]
pub struct NotificationListArgs {
    /// Workspace name
    pub workspace: String,
}

/// Arguments for 'notification create'
#[derive(Parser, Debug)]
pub struct NotificationCreateArgs {
    /// Workspace name
    pub workspace: String,

    /// Notification name
    pub name: String,

    /// Destination type
    #[arg(long = "type", value_enum)]
    pub destination_type: DestinationType,

    /// Disable the notification
    #[arg(long, default_value_t = false)]
    pub disabled: bool,

    /// Token used to sign generic webhook payloads
    #[arg(long)]
    pub token: Option<String>,

    /// Run event that triggers the notification (e.g. run:errored), repeatable
    #[arg(long = "trigger", value_name = "EVENT")]
    pub triggers: Vec<String>,

    /// Destination URL
    #[arg(long)]
    pub url: Option<String>,

    /// Email address receiving notifications, repeatable
    #[arg(long = "email-address", value_name = "EMAIL")]
    pub email_addresses: Vec<String>,

    /// Update the notification if it exists
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
}

/// Arguments for 'notification delete'
#[derive(Parser, Debug)]
pub struct NotificationDeleteArgs {
    /// Workspace name
    pub workspace: String,

    /// Notification name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
