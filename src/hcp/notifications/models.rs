//! Notification configuration data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Notification configuration data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct NotificationConfiguration {
    pub id: String,
    pub attributes: NotificationAttributes,
}

impl TfeResource for NotificationConfiguration {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl NotificationConfiguration {
    pub fn destination_type(&self) -> &str {
        &self.attributes.destination_type
    }

    pub fn is_enabled(&self) -> bool {
        self.attributes.enabled.unwrap_or(false)
    }
}

/// Notification configuration attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct NotificationAttributes {
    pub name: String,
    pub destination_type: String,
    pub enabled: Option<bool>,
    pub url: Option<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub email_addresses: Vec<String>,
}

/// Attributes sent when creating or updating a notification configuration
///
/// The destination type is fixed at creation; updates leave it unset.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct NotificationSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub triggers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_addresses: Vec<String>,
}

impl NotificationSpec {
    /// Same settings without the destination type, for PATCH requests
    pub fn for_update(&self) -> Self {
        Self {
            destination_type: None,
            ..self.clone()
        }
    }

    /// JSON:API request body for this spec
    pub fn to_request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "notification-configurations",
                "attributes": self
            }
        })
    }
}
