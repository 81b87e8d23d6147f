//! Variable API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{Variable, VariableSpec};

fn vars_path(workspace_id: &str) -> String {
    format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::VARS)
}

impl TfeClient {
    /// Get all variables of a workspace
    pub async fn get_variables(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        let path = vars_path(workspace_id);
        let error_context = format!("variables for workspace '{}'", workspace_id);

        self.fetch_all_pages::<Variable, ApiListResponse<Variable>>(&path, &error_context)
            .await
    }

    /// Create a variable in a workspace
    pub async fn create_variable(
        &self,
        workspace_id: &str,
        spec: &VariableSpec,
    ) -> Result<Variable> {
        let url = format!("{}{}", self.base_url(), vars_path(workspace_id));
        debug!("Creating variable '{}' in workspace {}", spec.key, workspace_id);

        let response = self.post(&url).json(&spec.to_request_body()).send().await?;
        self.parse_resource_response(response, &format!("create variable '{}'", spec.key))
            .await
    }

    /// Update an existing variable by ID
    pub async fn update_variable(
        &self,
        workspace_id: &str,
        variable_id: &str,
        spec: &VariableSpec,
    ) -> Result<Variable> {
        let url = format!(
            "{}{}/{}",
            self.base_url(),
            vars_path(workspace_id),
            variable_id
        );
        debug!("Updating variable '{}' ({})", spec.key, variable_id);

        let response = self.patch(&url).json(&spec.to_request_body()).send().await?;
        self.parse_resource_response(response, &format!("update variable '{}'", spec.key))
            .await
    }

    /// Delete a variable by ID
    pub async fn delete_variable(&self, workspace_id: &str, variable_id: &str) -> Result<()> {
        let url = format!(
            "{}{}/{}",
            self.base_url(),
            vars_path(workspace_id),
            variable_id
        );
        debug!("Deleting variable: {}", url);

        let response = self.delete(&url).send().await?;
        self.check_empty_response(response, &format!("delete variable '{}'", variable_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use crate::hcp::traits::TfeResource;
    use crate::hcp::variables::VariableCategory;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn variable_json(id: &str, key: &str, value: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "vars",
            "attributes": {
                "key": key,
                "value": value,
                "category": "terraform",
                "hcl": false,
                "sensitive": false
            }
        })
    }

    #[tokio::test]
    async fn test_get_variables() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-1/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    variable_json("var-1", "region", "us-east-1"),
                    variable_json("var-2", "zone", "a")
                ]
            })))
            .mount(&mock_server)
            .await;

        let vars = client.get_variables("ws-1").await.unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name(), "region");
    }

    #[tokio::test]
    async fn test_create_variable_sends_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let spec =
            VariableSpec::parse("region=us-east-1", VariableCategory::Terraform, false, false)
                .unwrap();

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/vars"))
            .and(header("Content-Type", "application/vnd.api+json"))
            .and(body_json(spec.to_request_body()))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": variable_json("var-new", "region", "us-east-1")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let var = client.create_variable("ws-1", &spec).await.unwrap();
        assert_eq!(var.id, "var-new");
    }

    #[tokio::test]
    async fn test_update_variable() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let spec =
            VariableSpec::parse("region=eu-west-1", VariableCategory::Terraform, false, false)
                .unwrap();

        Mock::given(method("PATCH"))
            .and(path("/workspaces/ws-1/vars/var-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": variable_json("var-1", "region", "eu-west-1")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let var = client.update_variable("ws-1", "var-1", &spec).await.unwrap();
        assert_eq!(var.attributes.value.as_deref(), Some("eu-west-1"));
    }

    #[tokio::test]
    async fn test_create_variable_validation_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let spec =
            VariableSpec::parse("region=x", VariableCategory::Terraform, false, false).unwrap();

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-1/vars"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Key has already been taken"))
            .mount(&mock_server)
            .await;

        match client.create_variable("ws-1", &spec).await {
            Err(TfeError::Api { status, message }) => {
                assert_eq!(status, 422);
                assert!(message.contains("region"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_delete_variable() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/workspaces/ws-1/vars/var-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client.delete_variable("ws-1", "var-1").await.is_ok());
    }
}
