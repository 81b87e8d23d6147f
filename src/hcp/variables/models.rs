//! Variable data models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TfeError};
use crate::hcp::traits::TfeResource;

/// Variable category: Terraform input or shell environment
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    Terraform,
    Env,
}

impl std::fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableCategory::Terraform => f.write_str("terraform"),
            VariableCategory::Env => f.write_str("env"),
        }
    }
}

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

impl Variable {
    /// Value for display; sensitive values are never returned by the API
    pub fn display_value(&self) -> &str {
        if self.attributes.sensitive {
            "(sensitive)"
        } else {
            self.attributes.value.as_deref().unwrap_or("")
        }
    }
}

/// Variable attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: VariableCategory,
    #[serde(default)]
    pub hcl: bool,
    #[serde(default)]
    pub sensitive: bool,
}

/// Attributes sent when creating or updating a variable
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VariableSpec {
    pub key: String,
    pub value: String,
    pub category: VariableCategory,
    pub hcl: bool,
    pub sensitive: bool,
}

impl VariableSpec {
    /// Build a spec from a `key=value` token
    ///
    /// The token is split on the first `=`, so the value may itself contain `=`.
    pub fn parse(
        token: &str,
        category: VariableCategory,
        hcl: bool,
        sensitive: bool,
    ) -> Result<Self> {
        match token.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok(Self {
                key: key.trim().to_string(),
                value: value.to_string(),
                category,
                hcl,
                sensitive,
            }),
            _ => Err(TfeError::InvalidVariable(token.to_string())),
        }
    }

    /// JSON:API request body for this spec
    pub fn to_request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": self
            }
        })
    }
}
