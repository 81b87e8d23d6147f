//! tfe - Main entry point

use clap::Parser;
use log::debug;

use tfe_cli::cli::{NotificationAction, VariableAction, WorkspaceAction};
use tfe_cli::hcp::{
    run_notification_create_command, run_notification_delete_command,
    run_notification_list_command, run_var_create_command, run_var_delete_command,
    run_var_list_command, run_var_parse_command, run_ws_create_command, run_ws_delete_command,
    run_ws_list_command,
};
use tfe_cli::{Cli, Command, TfeClient, TokenResolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    debug!(
        "tfe v{} (host={}, org={:?}, format={})",
        env!("CARGO_PKG_VERSION"),
        cli.host,
        cli.organization,
        cli.format
    );

    // Parsing a variable file needs no API access
    if let Command::Variable {
        action: VariableAction::Parse(args),
    } = &cli.command
    {
        return run_var_parse_command(args);
    }

    cli.organization()?;
    let token = TokenResolver::new(&cli.host).resolve(cli.tfe_token.as_deref())?;
    let client = TfeClient::new(token, cli.host.clone());

    match &cli.command {
        Command::Workspace { action } => match action {
            WorkspaceAction::List(args) => run_ws_list_command(&client, cli, args).await,
            WorkspaceAction::Create(args) => run_ws_create_command(&client, cli, args).await,
            WorkspaceAction::Delete(args) => run_ws_delete_command(&client, cli, args).await,
        },
        Command::Variable { action } => match action {
            VariableAction::List(args) => run_var_list_command(&client, cli, args).await,
            VariableAction::Create(args) => run_var_create_command(&client, cli, args).await,
            VariableAction::Delete(args) => run_var_delete_command(&client, cli, args).await,
            VariableAction::Parse(args) => run_var_parse_command(args),
        },
        Command::Notification { action } => match action {
            NotificationAction::List(args) => {
                run_notification_list_command(&client, cli, args).await
            }
            NotificationAction::Create(args) => {
                run_notification_create_command(&client, cli, args).await
            }
            NotificationAction::Delete(args) => {
                run_notification_delete_command(&client, cli, args).await
            }
        },
    }
}
