//! Notification command handlers

use log::{debug, info, warn};

use crate::cli::{Cli, NotificationCreateArgs, NotificationDeleteArgs, NotificationListArgs};
use crate::error::TfeError;
use crate::hcp::traits::index_by_name;
use crate::hcp::TfeClient;
use crate::output::output_notifications;
use crate::ui::{confirm_action, create_spinner, finish_spinner, finish_spinner_and_clear};

use super::models::NotificationSpec;

/// Run the notification list command
pub async fn run_notification_list_command(
    client: &TfeClient,
    cli: &Cli,
    args: &NotificationListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let spinner = create_spinner(
        &format!("Fetching notifications of workspace '{}'...", args.workspace),
        cli.batch,
    );

    let notifications = match client.require_workspace(org, &args.workspace).await {
        Ok(ws) => client.get_notifications(&ws.id).await,
        Err(e) => Err(e),
    };
    let notifications = match notifications {
        Ok(items) => {
            finish_spinner_and_clear(spinner);
            items
        }
        Err(e) => {
            finish_spinner(spinner, "Failed");
            return Err(e.into());
        }
    };

    debug!(
        "Found {} notifications in workspace '{}'",
        notifications.len(),
        args.workspace
    );
    output_notifications(&notifications, cli.format);
    Ok(())
}

/// Build the create/update payload from command arguments
fn notification_spec(args: &NotificationCreateArgs) -> NotificationSpec {
    NotificationSpec {
        name: args.name.clone(),
        destination_type: Some(args.destination_type.to_string()),
        enabled: !args.disabled,
        token: args.token.clone(),
        triggers: args.triggers.clone(),
        url: args.url.clone(),
        email_addresses: args.email_addresses.clone(),
    }
}

/// Run the notification create command
pub async fn run_notification_create_command(
    client: &TfeClient,
    cli: &Cli,
    args: &NotificationCreateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let workspace = client.require_workspace(org, &args.workspace).await?;
    let existing = index_by_name(client.get_notifications(&workspace.id).await?);
    let spec = notification_spec(args);

    match existing.get(&args.name) {
        Some(current) if args.force => {
            client.update_notification(&current.id, &spec).await?;
            info!("Notification '{}' updated", args.name);
        }
        Some(_) => {
            return Err(TfeError::AlreadyExists {
                kind: "notification",
                name: args.name.clone(),
            }
            .into());
        }
        None => {
            let created = client.create_notification(&workspace.id, &spec).await?;
            info!("Notification '{}' created ({})", args.name, created.id);
        }
    }
    Ok(())
}

/// Run the notification delete command
pub async fn run_notification_delete_command(
    client: &TfeClient,
    cli: &Cli,
    args: &NotificationDeleteArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let workspace = client.require_workspace(org, &args.workspace).await?;
    let existing = index_by_name(client.get_notifications(&workspace.id).await?);

    let Some(notification) = existing.get(&args.name) else {
        warn!(
            "Notification '{}' not found in workspace '{}'",
            args.name, args.workspace
        );
        return Ok(());
    };

    let prompt = format!(
        "Delete notification '{}' from workspace '{}'?",
        args.name, args.workspace
    );
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        return Err(TfeError::UserCancelled.into());
    }

    client.delete_notification(&notification.id).await?;
    info!("Notification '{}' deleted", args.name);
    Ok(())
}
