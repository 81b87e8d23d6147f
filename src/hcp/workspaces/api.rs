//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{Workspace, WorkspaceSpec};

/// Build the API path for an organization's workspaces with optional search
fn build_workspaces_path(org: &str, search: Option<&str>) -> String {
    let mut path = format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES
    );
    if let Some(s) = search {
        path.push_str(&format!("?search[name]={}", urlencoding::encode(s)));
    }
    path
}

/// Path of a single workspace addressed by organization and name
fn workspace_by_name_path(org: &str, name: &str) -> String {
    format!(
        "/{}/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES,
        urlencoding::encode(name)
    )
}

impl TfeClient {
    /// Get all workspaces of an organization, optionally filtered by name
    pub async fn get_workspaces(&self, org: &str, search: Option<&str>) -> Result<Vec<Workspace>> {
        let path = build_workspaces_path(org, search);
        let error_context = format!(
            "workspaces for organization '{}' (search: {:?})",
            org, search
        );

        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(&path, &error_context)
            .await
    }

    /// Get a single workspace by name, `None` if it does not exist
    pub async fn get_workspace_by_name(&self, org: &str, name: &str) -> Result<Option<Workspace>> {
        let path = workspace_by_name_path(org, name);
        self.fetch_resource_by_path::<Workspace>(&path, &format!("workspace '{}'", name))
            .await
    }

    /// Get a workspace that must exist
    pub async fn require_workspace(&self, org: &str, name: &str) -> Result<Workspace> {
        self.get_workspace_by_name(org, name)
            .await?
            .ok_or_else(|| TfeError::Api {
                status: 404,
                message: format!(
                    "Workspace '{}' not found in organization '{}'",
                    name, org
                ),
            })
    }

    /// Create a workspace in an organization
    pub async fn create_workspace(&self, org: &str, spec: &WorkspaceSpec) -> Result<Workspace> {
        let url = format!("{}{}", self.base_url(), build_workspaces_path(org, None));
        debug!("Creating workspace '{}' at {}", spec.name, url);

        let response = self.post(&url).json(&spec.to_request_body()).send().await?;
        self.parse_resource_response(response, &format!("create workspace '{}'", spec.name))
            .await
    }

    /// Update a workspace by ID
    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        spec: &WorkspaceSpec,
    ) -> Result<Workspace> {
        let url = format!("{}/{}/{}", self.base_url(), api::WORKSPACES, workspace_id);
        debug!("Updating workspace {} ({})", spec.name, workspace_id);

        let response = self.patch(&url).json(&spec.to_request_body()).send().await?;
        self.parse_resource_response(response, &format!("update workspace '{}'", spec.name))
            .await
    }

    /// Delete a workspace by organization and name
    pub async fn delete_workspace(&self, org: &str, name: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url(), workspace_by_name_path(org, name));
        debug!("Deleting workspace: {}", url);

        let response = self.delete(&url).send().await?;
        self.check_empty_response(response, &format!("delete workspace '{}'", name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::traits::TfeResource;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "workspaces",
            "attributes": {
                "name": name,
                "execution-mode": "remote",
                "resource-count": 10,
                "locked": false,
                "terraform-version": "1.5.0"
            }
        })
    }

    fn spec(name: &str) -> WorkspaceSpec {
        WorkspaceSpec {
            name: name.to_string(),
            auto_apply: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_workspaces_path() {
        assert_eq!(
            build_workspaces_path("acme", None),
            "/organizations/acme/workspaces"
        );
        assert_eq!(
            build_workspaces_path("acme", Some("prod app")),
            "/organizations/acme/workspaces?search[name]=prod%20app"
        );
    }

    #[tokio::test]
    async fn test_get_workspaces_with_search() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .and(query_param("search[name]", "prod"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [workspace_json("ws-1", "prod-app"), workspace_json("ws-2", "prod-db")]
            })))
            .mount(&mock_server)
            .await;

        let workspaces = client.get_workspaces("acme", Some("prod")).await.unwrap();
        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[1].name(), "prod-db");
    }

    #[tokio::test]
    async fn test_get_workspace_by_name_found_and_missing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces/app"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "data": workspace_json("ws-1", "app") })),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let found = client.get_workspace_by_name("acme", "app").await.unwrap();
        assert_eq!(found.unwrap().id, "ws-1");

        let missing = client.get_workspace_by_name("acme", "ghost").await.unwrap();
        assert!(missing.is_none());

        match client.require_workspace("acme", "ghost").await {
            Err(TfeError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert!(message.contains("ghost"));
                assert!(message.contains("acme"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_create_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/workspaces"))
            .and(body_json(spec("app").to_request_body()))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "data": workspace_json("ws-new", "app") })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let ws = client.create_workspace("acme", &spec("app")).await.unwrap();
        assert_eq!(ws.id, "ws-new");
    }

    #[tokio::test]
    async fn test_create_workspace_unprocessable() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string("Name has already been taken"),
            )
            .mount(&mock_server)
            .await;

        match client.create_workspace("acme", &spec("app")).await {
            Err(TfeError::Api { status, message }) => {
                assert_eq!(status, 422);
                assert!(message.contains("create workspace 'app'"));
                assert!(message.contains("already been taken"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_update_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/workspaces/ws-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "data": workspace_json("ws-1", "app") })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let ws = client.update_workspace("ws-1", &spec("app")).await.unwrap();
        assert_eq!(ws.name(), "app");
    }

    #[tokio::test]
    async fn test_delete_workspace() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/organizations/acme/workspaces/app"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client.delete_workspace("acme", "app").await.is_ok());
    }
}
