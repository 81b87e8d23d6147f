//! Variable output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{csv_line, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::hcp::{TfeResource, Variable};

/// Serializable variable for structured output (JSON/YAML)
#[derive(Serialize, Debug, PartialEq)]
struct SerializableVariable {
    key: String,
    value: String,
    category: String,
    hcl: bool,
    sensitive: bool,
    id: String,
}

impl From<&Variable> for SerializableVariable {
    fn from(var: &Variable) -> Self {
        Self {
            key: var.name().to_string(),
            value: var.display_value().to_string(),
            category: var.attributes.category.to_string(),
            hcl: var.attributes.hcl,
            sensitive: var.attributes.sensitive,
            id: var.id.clone(),
        }
    }
}

/// Output variables in the specified format
pub fn output_variables(variables: &[Variable], format: OutputFormat) {
    let rows: Vec<SerializableVariable> =
        variables.iter().map(SerializableVariable::from).collect();
    match format {
        OutputFormat::Table => output_table(&rows),
        OutputFormat::Csv => println!("{}", render_csv(&rows)),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}

fn output_table(rows: &[SerializableVariable]) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Key", "Value", "Category", "HCL", "Sensitive", "ID"]);

    for var in rows {
        table.add_row(vec![
            var.key.clone(),
            var.value.clone(),
            var.category.clone(),
            var.hcl.to_string(),
            var.sensitive.to_string(),
            var.id.clone(),
        ]);
    }

    println!("{table}");
}

fn render_csv(rows: &[SerializableVariable]) -> String {
    let mut lines = vec!["key,value,category,hcl,sensitive,id".to_string()];
    for var in rows {
        lines.push(csv_line(&[
            &var.key,
            &var.value,
            &var.category,
            &var.hcl.to_string(),
            &var.sensitive.to_string(),
            &var.id,
        ]));
    }
    lines.join("\n")
}
