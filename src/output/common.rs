//! Common utilities for output formatters

use serde::Serialize;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Escape and join fields into one CSV line
pub fn csv_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| escape_csv(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Print data as pretty JSON
pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: cannot serialize output as JSON: {}", e),
    }
}

/// Print data as YAML
pub fn print_yaml<T: Serialize>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error: cannot serialize output as YAML: {}", e),
    }
}
