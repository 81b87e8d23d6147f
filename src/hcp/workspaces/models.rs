//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::error::{Result, TfeError};
use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Get resource count, defaulting to 0 if not available
    pub fn resource_count(&self) -> u32 {
        self.attributes.resource_count.unwrap_or(0)
    }

    /// Get execution mode, defaulting to "unknown" if not available
    pub fn execution_mode(&self) -> &str {
        self.attributes
            .execution_mode
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Check if workspace is locked
    pub fn is_locked(&self) -> bool {
        self.attributes.locked.unwrap_or(false)
    }

    /// Get terraform version, defaulting to "unknown" if not available
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .terraform_version
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Get updated_at timestamp, defaulting to empty string if not available
    pub fn updated_at(&self) -> &str {
        self.attributes.updated_at.as_deref().unwrap_or("")
    }

    /// VCS repository identifier, if the workspace is VCS-backed
    pub fn vcs_identifier(&self) -> Option<&str> {
        self.attributes
            .vcs_repo
            .as_ref()
            .and_then(|repo| repo.identifier.as_deref())
    }
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceAttributes {
    pub name: String,
    pub auto_apply: Option<bool>,
    pub file_triggers_enabled: Option<bool>,
    pub execution_mode: Option<String>,
    pub resource_count: Option<u32>,
    pub locked: Option<bool>,
    pub terraform_version: Option<String>,
    pub working_directory: Option<String>,
    pub updated_at: Option<String>,
    pub vcs_repo: Option<VcsRepoAttributes>,
}

/// VCS repository attributes as returned by the API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct VcsRepoAttributes {
    pub identifier: Option<String>,
    pub branch: Option<String>,
    pub oauth_token_id: Option<String>,
}

/// Attributes sent when creating or updating a workspace
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceSpec {
    pub name: String,
    pub auto_apply: bool,
    pub file_triggers_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcs_repo: Option<VcsRepo>,
}

impl WorkspaceSpec {
    /// JSON:API request body for this spec
    pub fn to_request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": self
            }
        })
    }
}

/// VCS repository settings for a workspace
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct VcsRepo {
    pub oauth_token_id: String,
    pub identifier: String,
    pub branch: String,
}

impl VcsRepo {
    /// Parse `<OAuthTokenID>:<repository>:<branch>`
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(':').collect();
        match parts.as_slice() {
            [token, repo, branch] if !token.is_empty() && !repo.is_empty() => Ok(Self {
                oauth_token_id: token.to_string(),
                identifier: repo.to_string(),
                branch: branch.to_string(),
            }),
            _ => Err(TfeError::Config(format!(
                "invalid VCS repository {:?}: expected <OAuthTokenID>:<repository>:<branch>",
                input
            ))),
        }
    }
}
