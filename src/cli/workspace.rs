//! Workspace command arguments

use clap::{Parser, Subcommand};

/// Actions for the 'workspace' command
#[derive(Subcommand, Debug)]
pub enum WorkspaceAction {
    /// List TFE workspaces
    #[command(visible_alias = "ls")]
    List(WsListArgs),

    /// Create a TFE workspace (or update it with --force)
    Create(WsCreateArgs),

    /// Delete a TFE workspace
    #[command(visible_alias = "rm")]
    Delete(WsDeleteArgs),
}

/// Arguments for 'workspace list'
#[derive(Parser, Debug)]
pub struct WsListArgs {
    /// Filter workspaces by name (server-side search)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'workspace create'
#[derive(Parser, Debug)]
pub struct WsCreateArgs {
    /// Workspace name
    pub name: String,

    /// Apply changes automatically
    #[arg(long, default_value_t = false)]
    pub auto_apply: bool,

    /// Filter runs based on the changed files in a VCS push
    #[arg(long, default_value_t = false)]
    pub file_triggers: bool,

    /// Terraform version
    #[arg(long)]
    pub terraform_version: Option<String>,

    /// Relative path that Terraform will execute within
    #[arg(long)]
    pub working_directory: Option<String>,

    /// VCS repository as <OAuthTokenID>:<repository>:<branch>
    ///
    /// Example: ot-8Xc1NTYpjIQZIwIh:acme/infra:main
    #[arg(long, value_name = "TOKEN_ID:REPO:BRANCH")]
    pub vcs_repository: Option<String>,

    /// Update the workspace if it exists
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
}

/// Arguments for 'workspace delete'
#[derive(Parser, Debug)]
pub struct WsDeleteArgs {
    /// Workspace name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
