//! tfe - Manage Terraform Enterprise from the command line
//!
//! A CLI to manage TFE / HCP Terraform workspaces, variables and
//! notifications, with a parser that turns Terraform variable files into
//! `key=value` tokens.
//!
//! # Example
//!
//! ```bash
//! # List workspaces
//! tfe -o my-org workspace list --filter prod
//!
//! # Create variables from a tfvars file, overwriting existing ones
//! tfe -o my-org variable create my-ws --var-file prod.tfvars --force
//!
//! # Show what a tfvars file turns into, without calling the API
//! tfe variable parse prod.tfvars
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;
pub mod varfile;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Result, TfeError};
pub use hcp::{TfeClient, TfeResource, TokenResolver, Variable, Workspace};
pub use varfile::{
    decode_var_file, encode_var_file, encode_variable, parse_var_file, split_declarations,
    VarFile, VarValue,
};
