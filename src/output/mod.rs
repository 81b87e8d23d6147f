//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod notifications;
mod variables;
mod workspaces;

pub use common::escape_csv;
pub use notifications::output_notifications;
pub use variables::output_variables;
pub use workspaces::output_workspaces;
