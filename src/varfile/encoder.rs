//! Re-encode decoded variables as single-line `key=value` tokens
//!
//! The tokens use the same syntax the `--var`/`--hvar` flags accept, so a
//! variable file can be fed through the regular variable-create pipeline.

use super::value::{VarFile, VarValue};

/// Encode one variable as `key=<encoded value>`
pub fn encode_variable(key: &str, value: &VarValue) -> String {
    format!("{}={}", key, encode_value(value))
}

/// Encode a value on its own, without the `key=` prefix
///
/// Maps become `{k=v,k2=v2,}` with a trailing comma after every entry,
/// lists become `["a", "b"]`, strings are double-quoted and numbers are
/// written bare.
pub fn encode_value(value: &VarValue) -> String {
    match value {
        VarValue::Integer(i) => i.to_string(),
        VarValue::Float(f) => format_float(*f),
        VarValue::String(s) => format!("\"{}\"", s),
        VarValue::Map(entries) => encode_map(entries),
        VarValue::List(items) => match items.first() {
            None => "[]".to_string(),
            // A lone map in a list collapses to the map itself
            Some(VarValue::Map(entries)) if items.len() == 1 => encode_map(entries),
            Some(VarValue::Map(_)) => {
                let encoded: Vec<String> = items.iter().map(encode_value).collect();
                format!("[{}]", encoded.join(", "))
            }
            Some(_) => {
                let encoded: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        VarValue::List(_) | VarValue::Map(_) => encode_value(item),
                        _ => format!("\"{}\"", plain_value(item)),
                    })
                    .collect();
                format!("[{}]", encoded.join(", "))
            }
        },
    }
}

/// Floats always keep a decimal point: `10.0`, not `10`
fn format_float(f: f64) -> String {
    format!("{:?}", f)
}

fn encode_map(entries: &[(String, VarValue)]) -> String {
    let mut out = String::from("{");
    for (key, value) in entries {
        out.push_str(&encode_variable(key, value));
        out.push(',');
    }
    out.push('}');
    out
}

/// Value as plain text: strings unquoted, containers encoded
pub fn plain_value(value: &VarValue) -> String {
    match value {
        VarValue::String(s) => s.clone(),
        VarValue::Integer(i) => i.to_string(),
        VarValue::Float(f) => format_float(*f),
        VarValue::List(_) | VarValue::Map(_) => encode_value(value),
    }
}

/// Encode every top-level entry of a variable file
pub fn encode_var_file(file: &VarFile) -> Vec<String> {
    file.iter()
        .map(|(key, value)| encode_variable(key, value))
        .collect()
}

/// Variable file split into regular and HCL `key=value` tokens
#[derive(Debug, Default, PartialEq)]
pub struct FlattenedVars {
    /// Scalars, with plain (unquoted) values
    pub regular: Vec<String>,
    /// Lists and maps, with HCL-encoded values
    pub hcl: Vec<String>,
}

/// Flatten a decoded variable file into tokens for variable creation
pub fn flatten_var_file(file: &VarFile) -> FlattenedVars {
    let mut flattened = FlattenedVars::default();
    for (key, value) in file {
        if value.is_hcl() {
            flattened.hcl.push(encode_variable(key, value));
        } else {
            flattened
                .regular
                .push(format!("{}={}", key, plain_value(value)));
        }
    }
    flattened
}
