//! Common traits for TFE resources

use std::collections::HashMap;

use serde::Deserialize;

use crate::hcp::PaginationMeta;

/// Common trait for TFE resources (workspaces, variables, notifications)
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name (variable key for variables)
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// Index resources by name; a later duplicate replaces an earlier one
pub fn index_by_name<T: TfeResource>(items: Vec<T>) -> HashMap<String, T> {
    items
        .into_iter()
        .map(|item| (item.name().to_string(), item))
        .collect()
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any response struct to enable use with
/// `TfeClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}
