//! Variable command arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::hcp::VariableCategory;

/// Actions for the 'variable' command
#[derive(Subcommand, Debug)]
pub enum VariableAction {
    /// List TFE variables for a specific workspace
    #[command(visible_alias = "ls")]
    List(VariableListArgs),

    /// Create TFE variables (or update them with --force)
    Create(VariableCreateArgs),

    /// Delete a TFE variable from a specific workspace
    #[command(visible_alias = "rm")]
    Delete(VariableDeleteArgs),

    /// Print the key=value tokens of a variable file without calling the API
    Parse(VariableParseArgs),
}

/// Arguments for 'variable list'
#[derive(Parser, Debug)]
pub struct VariableListArgs {
    /// Workspace name
    pub workspace: String,
}

/// Arguments for 'variable create'
#[derive(Parser, Debug)]
pub struct VariableCreateArgs {
    /// Workspace name
    pub workspace: String,

    /// Create a regular variable
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Create a regular sensitive variable
    #[arg(long = "svar", value_name = "KEY=VALUE")]
    pub svars: Vec<String>,

    /// Create an HCL variable
    #[arg(long = "hvar", value_name = "KEY=VALUE")]
    pub hvars: Vec<String>,

    /// Create a sensitive HCL variable
    #[arg(long = "shvar", value_name = "KEY=VALUE")]
    pub shvars: Vec<String>,

    /// Create an environment variable
    #[arg(long = "evar", value_name = "KEY=VALUE")]
    pub evars: Vec<String>,

    /// Create a sensitive environment variable
    #[arg(long = "sevar", value_name = "KEY=VALUE")]
    pub sevars: Vec<String>,

    /// Create non-sensitive regular and HCL variables from an HCL file
    #[arg(long)]
    pub var_file: Option<PathBuf>,

    /// Create non-sensitive environment variables from a KEY = value file
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Overwrite a variable if it exists
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
}

/// Arguments for 'variable delete'
#[derive(Parser, Debug)]
pub struct VariableDeleteArgs {
    /// Workspace name
    pub workspace: String,

    /// Variable key
    pub key: String,

    /// Only delete the variable in this category (needed when the key exists in both)
    #[arg(long, value_enum)]
    pub category: Option<VariableCategory>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'variable parse'
#[derive(Parser, Debug)]
pub struct VariableParseArgs {
    /// Variable file to parse
    pub file: PathBuf,

    /// Split declarations line by line and keep values as raw text
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}
