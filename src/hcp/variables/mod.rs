//! Workspace variable operations

mod api;
mod commands;
mod models;

pub use commands::{
    run_var_create_command, run_var_delete_command, run_var_list_command,
    run_var_parse_command,
};
pub use models::{Variable, VariableAttributes, VariableCategory, VariableSpec};
