//! TFE API client module
//!
//! Workspaces, variables and notification configurations of a Terraform
//! Enterprise / HCP Terraform organization.

mod client;
mod credentials;
pub mod notifications;
pub mod traits;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use notifications::{
    run_notification_create_command, run_notification_delete_command,
    run_notification_list_command, NotificationConfiguration, NotificationSpec,
};
pub use traits::{PaginatedResponse, TfeResource};
pub use variables::{
    run_var_create_command, run_var_delete_command, run_var_list_command,
    run_var_parse_command, Variable, VariableCategory, VariableSpec,
};
pub use workspaces::{
    run_ws_create_command, run_ws_delete_command, run_ws_list_command, Workspace,
    WorkspaceSpec,
};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}
