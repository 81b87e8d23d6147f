//! Notification configuration API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{NotificationConfiguration, NotificationSpec};

fn workspace_notifications_path(workspace_id: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::WORKSPACES,
        workspace_id,
        api::NOTIFICATION_CONFIGURATIONS
    )
}

impl TfeClient {
    /// Get all notification configurations of a workspace
    pub async fn get_notifications(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<NotificationConfiguration>> {
        let path = workspace_notifications_path(workspace_id);
        let error_context = format!("notifications for workspace '{}'", workspace_id);

        self.fetch_all_pages::<NotificationConfiguration, ApiListResponse<NotificationConfiguration>>(
            &path,
            &error_context,
        )
        .await
    }

    /// Create a notification configuration in a workspace
    pub async fn create_notification(
        &self,
        workspace_id: &str,
        spec: &NotificationSpec,
    ) -> Result<NotificationConfiguration> {
        let url = format!(
            "{}{}",
            self.base_url(),
            workspace_notifications_path(workspace_id)
        );
        debug!("Creating notification '{}' in workspace {}", spec.name, workspace_id);

        let response = self.post(&url).json(&spec.to_request_body()).send().await?;
        self.parse_resource_response(response, &format!("create notification '{}'", spec.name))
            .await
    }

    /// Update a notification configuration by ID
    pub async fn update_notification(
        &self,
        notification_id: &str,
        spec: &NotificationSpec,
    ) -> Result<NotificationConfiguration> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::NOTIFICATION_CONFIGURATIONS,
            notification_id
        );
        debug!("Updating notification '{}' ({})", spec.name, notification_id);

        let body = spec.for_update().to_request_body();
        let response = self.patch(&url).json(&body).send().await?;
        self.parse_resource_response(response, &format!("update notification '{}'", spec.name))
            .await
    }

    /// Delete a notification configuration by ID
    pub async fn delete_notification(&self, notification_id: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::NOTIFICATION_CONFIGURATIONS,
            notification_id
        );
        debug!("Deleting notification: {}", url);

        let response = self.delete(&url).send().await?;
        self.check_empty_response(
            response,
            &format!("delete notification '{}'", notification_id),
        )
        .await
    }
}
