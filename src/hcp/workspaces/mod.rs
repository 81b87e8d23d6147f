//! Workspace module

mod api;
mod commands;
mod models;

pub use commands::{run_ws_create_command, run_ws_delete_command, run_ws_list_command};
pub use models::{VcsRepo, VcsRepoAttributes, Workspace, WorkspaceAttributes, WorkspaceSpec};
