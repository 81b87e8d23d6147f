//! Workspace output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{csv_line, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::hcp::{TfeResource, Workspace};

/// Serializable workspace for structured output (JSON/YAML)
#[derive(Serialize, Debug, PartialEq)]
struct SerializableWorkspace {
    name: String,
    id: String,
    resources: u32,
    execution_mode: String,
    locked: bool,
    terraform_version: String,
    vcs_repository: String,
    updated_at: String,
}

impl From<&Workspace> for SerializableWorkspace {
    fn from(ws: &Workspace) -> Self {
        Self {
            name: ws.name().to_string(),
            id: ws.id.clone(),
            resources: ws.resource_count(),
            execution_mode: ws.execution_mode().to_string(),
            locked: ws.is_locked(),
            terraform_version: ws.terraform_version().to_string(),
            vcs_repository: ws.vcs_identifier().unwrap_or("").to_string(),
            updated_at: ws.updated_at().to_string(),
        }
    }
}

/// Output workspaces in the specified format
pub fn output_workspaces(workspaces: &[Workspace], format: OutputFormat) {
    let rows: Vec<SerializableWorkspace> =
        workspaces.iter().map(SerializableWorkspace::from).collect();
    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => println!("{}", render_csv(&rows)),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}

fn output_table(rows: &[SerializableWorkspace]) {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "Name",
        "ID",
        "Resources",
        "Execution Mode",
        "Locked",
        "TF Version",
        "VCS Repository",
        "Updated At",
    ]);

    for ws in rows {
        let locked = if ws.locked { "Yes" } else { "No" };
        table.add_row(vec![
            ws.name.clone(),
            ws.id.clone(),
            ws.resources.to_string(),
            ws.execution_mode.clone(),
            locked.to_string(),
            ws.terraform_version.clone(),
            ws.vcs_repository.clone(),
            ws.updated_at.clone(),
        ]);
    }

    println!("{table}");
    println!("\nTotal: {} workspaces", rows.len());
}

fn render_csv(rows: &[SerializableWorkspace]) -> String {
    let mut lines = vec![
        "name,id,resources,execution_mode,locked,terraform_version,vcs_repository,updated_at"
            .to_string(),
    ];
    for ws in rows {
        lines.push(csv_line(&[
            &ws.name,
            &ws.id,
            &ws.resources.to_string(),
            &ws.execution_mode,
            &ws.locked.to_string(),
            &ws.terraform_version,
            &ws.vcs_repository,
            &ws.updated_at,
        ]));
    }
    lines.join("\n")
}
