//! Workspace notification configuration operations

mod api;
mod commands;
mod models;

pub use commands::{
    run_notification_create_command, run_notification_delete_command,
    run_notification_list_command,
};
pub use models::{NotificationAttributes, NotificationConfiguration, NotificationSpec};
