//! Typed values decoded from HCL variable files

use crate::error::Result;

/// A variable value, tagged by the shape the HCL decoder produced
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    /// Whole numbers, wide enough for every `i64` and `u64`
    Integer(i128),
    Float(f64),
    String(String),
    List(Vec<VarValue>),
    /// Entries in source order
    Map(Vec<(String, VarValue)>),
}

/// Top-level entries of a decoded variable file, in source order
pub type VarFile = Vec<(String, VarValue)>;

impl VarValue {
    /// True for lists and maps, which TFE stores as HCL variables
    pub fn is_hcl(&self) -> bool {
        matches!(self, VarValue::List(_) | VarValue::Map(_))
    }
}

impl From<hcl::Number> for VarValue {
    fn from(number: hcl::Number) -> Self {
        if let Some(i) = number.as_i64() {
            VarValue::Integer(i.into())
        } else if let Some(u) = number.as_u64() {
            VarValue::Integer(u.into())
        } else {
            match number.as_f64() {
                Some(f) => VarValue::Float(f),
                None => VarValue::String(number.to_string()),
            }
        }
    }
}

impl From<hcl::Value> for VarValue {
    fn from(value: hcl::Value) -> Self {
        match value {
            hcl::Value::Number(n) => n.into(),
            hcl::Value::String(s) => VarValue::String(s),
            hcl::Value::Bool(b) => VarValue::String(b.to_string()),
            hcl::Value::Null => VarValue::String(String::new()),
            hcl::Value::Array(items) => {
                VarValue::List(items.into_iter().map(VarValue::from).collect())
            }
            hcl::Value::Object(map) => VarValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, VarValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Decode HCL text into its top-level entries
///
/// Fails with `TfeError::Decode` on malformed input; no partial result is
/// returned.
pub fn decode_var_file(content: &str) -> Result<VarFile> {
    let value: hcl::Value = hcl::from_str(content)?;

    Ok(match VarValue::from(value) {
        VarValue::Map(entries) => entries,
        // A body always decodes to an object; anything else has no keys
        _ => Vec::new(),
    })
}
