//! Notification output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{csv_line, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::hcp::{NotificationConfiguration, TfeResource};

/// Serializable notification for structured output (JSON/YAML)
#[derive(Serialize, Debug, PartialEq)]
struct SerializableNotification {
    name: String,
    destination_type: String,
    enabled: bool,
    triggers: Vec<String>,
    id: String,
}

impl From<&NotificationConfiguration> for SerializableNotification {
    fn from(nc: &NotificationConfiguration) -> Self {
        Self {
            name: nc.name().to_string(),
            destination_type: nc.destination_type().to_string(),
            enabled: nc.is_enabled(),
            triggers: nc.attributes.triggers.clone(),
            id: nc.id.clone(),
        }
    }
}

/// Output notification configurations in the specified format
pub fn output_notifications(notifications: &[NotificationConfiguration], format: OutputFormat) {
    let rows: Vec<SerializableNotification> = notifications
        .iter()
        .map(SerializableNotification::from)
        .collect();
    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => println!("{}", render_csv(&rows)),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}

fn output_table(rows: &[SerializableNotification]) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Name", "Type", "Enabled", "Triggers", "ID"]);

    for nc in rows {
        table.add_row(vec![
            nc.name.clone(),
            nc.destination_type.clone(),
            nc.enabled.to_string(),
            nc.triggers.join(" "),
            nc.id.clone(),
        ]);
    }

    println!("{table}");
}

fn render_csv(rows: &[SerializableNotification]) -> String {
    let mut lines = vec!["name,destination_type,enabled,triggers,id".to_string()];
    for nc in rows {
        lines.push(csv_line(&[
            &nc.name,
            &nc.destination_type,
            &nc.enabled.to_string(),
            &nc.triggers.join(" "),
            &nc.id,
        ]));
    }
    lines.join("\n")
}
