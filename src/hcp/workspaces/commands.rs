//! Workspace command handlers

use log::{debug, info, warn};

use crate::cli::{Cli, WsCreateArgs, WsDeleteArgs, WsListArgs};
use crate::error::TfeError;
use crate::hcp::TfeClient;
use crate::output::output_workspaces;
use crate::ui::{confirm_action, create_spinner, finish_spinner, finish_spinner_and_clear};

use super::models::{VcsRepo, WorkspaceSpec};

/// Run the workspace list command
pub async fn run_ws_list_command(
    client: &TfeClient,
    cli: &Cli,
    args: &WsListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let spinner = create_spinner(
        &format!("Fetching workspaces from organization '{}'...", org),
        cli.batch,
    );

    let workspaces = match client.get_workspaces(org, args.filter.as_deref()).await {
        Ok(ws) => {
            finish_spinner_and_clear(spinner);
            ws
        }
        Err(e) => {
            finish_spinner(spinner, "Failed");
            return Err(e.into());
        }
    };

    debug!("Found {} workspaces in '{}'", workspaces.len(), org);
    output_workspaces(&workspaces, cli.format);
    Ok(())
}

/// Build the create/update payload from command arguments
fn workspace_spec(args: &WsCreateArgs) -> crate::error::Result<WorkspaceSpec> {
    let vcs_repo = args
        .vcs_repository
        .as_deref()
        .map(VcsRepo::parse)
        .transpose()?;

    Ok(WorkspaceSpec {
        name: args.name.clone(),
        auto_apply: args.auto_apply,
        file_triggers_enabled: args.file_triggers,
        terraform_version: args.terraform_version.clone(),
        working_directory: args.working_directory.clone(),
        vcs_repo,
    })
}

/// Run the workspace create command
pub async fn run_ws_create_command(
    client: &TfeClient,
    cli: &Cli,
    args: &WsCreateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let spec = workspace_spec(args)?;

    match client.get_workspace_by_name(org, &args.name).await? {
        Some(existing) if args.force => {
            client.update_workspace(&existing.id, &spec).await?;
            info!("Workspace '{}' updated", args.name);
        }
        Some(_) => {
            info!(
                "Workspace '{}' already exists (use --force to update it)",
                args.name
            );
        }
        None => {
            let created = client.create_workspace(org, &spec).await?;
            info!("Workspace '{}' created ({})", args.name, created.id);
        }
    }
    Ok(())
}

/// Run the workspace delete command
pub async fn run_ws_delete_command(
    client: &TfeClient,
    cli: &Cli,
    args: &WsDeleteArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;

    if client.get_workspace_by_name(org, &args.name).await?.is_none() {
        warn!(
            "Workspace '{}' not found in organization '{}'",
            args.name, org
        );
        return Ok(());
    }

    let prompt = format!("Delete workspace '{}' from '{}'?", args.name, org);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        return Err(TfeError::UserCancelled.into());
    }

    client.delete_workspace(org, &args.name).await?;
    info!("Workspace '{}' deleted", args.name);
    Ok(())
}
