//! TFE HTTP client for API interactions

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client with optimized connection settings
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(TfeError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Parse the `data` member of a single-resource response (create/update)
    ///
    /// Non-success responses become `TfeError::Api` carrying the response
    /// body, which holds the JSON:API error details.
    pub(crate) async fn parse_resource_response<T>(
        &self,
        response: reqwest::Response,
        action: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TfeError::Api {
                status,
                message: format!("Failed to {}: {}", action, body),
            });
        }

        let raw: serde_json::Value = response.json().await?;
        serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
            status,
            message: format!("Failed to parse response to {}: {}", action, e),
        })
    }

    /// Check a response that carries no body on success (DELETE)
    pub(crate) async fn check_empty_response(
        &self,
        response: reqwest::Response,
        action: &str,
    ) -> Result<()> {
        match response.status().as_u16() {
            200 | 202 | 204 => Ok(()),
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("Failed to {}: not found", action),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to {}: {}", action, body),
                })
            }
        }
    }

    /// Fetch all pages from a paginated API endpoint with parallel fetching
    ///
    /// Fetches page 1 first to learn total_pages, then fetches the remaining
    /// pages in parallel (with concurrency limit). Items come back in page
    /// order; any failed page fails the whole call.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/workspaces/ws-abc/vars" or with query "...?search[name]=foo")
    /// * `error_context` - Context for error messages (e.g., "variables for workspace 'app'")
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: Send,
        R: DeserializeOwned + PaginatedResponse<T> + Send,
    {
        // Detect if path already has query params
        let separator = if path.contains('?') { "&" } else { "?" };

        let first_page_url = format!(
            "{}{}{}page[size]={}&page[number]=1",
            self.base_url(),
            path,
            separator,
            api::DEFAULT_PAGE_SIZE,
        );

        debug!("Fetching page 1 from: {}", first_page_url);

        let response = self.get(&first_page_url).send().await?;

        let first_resp: R = self.parse_api_response(response, error_context).await?;
        let meta = first_resp.meta().cloned();
        let mut all_items = first_resp.into_data();

        let (total_pages, total_count) = match meta.and_then(|m| m.pagination) {
            Some(p) => (p.total_pages, p.total_count),
            None => return Ok(all_items), // No pagination info = single page
        };

        debug!("Page 1/{}, total items: {}", total_pages, total_count);

        if total_pages <= 1 {
            return Ok(all_items);
        }

        debug!(
            "Fetching {} remaining pages in parallel (max {} concurrent)",
            total_pages - 1,
            api::MAX_CONCURRENT_PAGE_REQUESTS
        );

        let page_futures = (2..=total_pages).map(|page_num| {
            let url = format!(
                "{}{}{}page[size]={}&page[number]={}",
                self.base_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page_num
            );
            self.fetch_single_page::<T, R>(url, page_num, error_context)
        });

        let results: Vec<Result<(u32, Vec<T>)>> = stream::iter(page_futures)
            .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
            .collect()
            .await;

        let mut page_results = results.into_iter().collect::<Result<Vec<_>>>()?;

        // Sort by page number to maintain consistent ordering
        page_results.sort_by_key(|(page_num, _)| *page_num);

        for (_, items) in page_results {
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for other non-success codes.
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T =
                    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                        status: 200,
                        message: format!("Failed to parse {}: {}", resource_label, e),
                    })?;
                Ok(Some(item))
            }
            404 => Ok(None),
            status => Err(TfeError::Api {
                status,
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }

    /// Fetch a single page (helper for parallel pagination)
    async fn fetch_single_page<T, R>(
        &self,
        url: String,
        page_num: u32,
        error_context: &str,
    ) -> Result<(u32, Vec<T>)>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(&url).send().await?;

        let page_context = format!("{} (page {})", error_context, page_num);
        let resp: R = self.parse_api_response(response, &page_context).await?;
        let items = resp.into_data();

        debug!("Page {} returned {} items", page_num, items.len());
        Ok((page_num, items))
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::hcp::traits::ApiListResponse;

    #[derive(Deserialize, Debug, Clone)]
    struct TestItem {
        id: String,
        name: String,
    }

    fn test_item_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "name": name })
    }

    fn page(items: Vec<serde_json::Value>, current: u32, total: u32) -> serde_json::Value {
        serde_json::json!({
            "data": items,
            "meta": {
                "pagination": {
                    "current-page": current,
                    "total-pages": total,
                    "total-count": total * 2
                }
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page_sends_auth() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(
                vec![
                    test_item_json("item-1", "Item 1"),
                    test_item_json("item-2", "Item 2"),
                ],
                1,
                1,
            )))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[1].name, "Item 2");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_multiple_pages_keeps_order() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        for page_num in 1..=3u32 {
            let first = format!("item-{}", page_num * 2 - 1);
            let second = format!("item-{}", page_num * 2);
            Mock::given(method("GET"))
                .and(path("/test-items"))
                .and(query_param("page[number]", page_num.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(page(
                    vec![
                        test_item_json(&first, &first),
                        test_item_json(&second, &second),
                    ],
                    page_num,
                    3,
                )))
                .mount(&mock_server)
                .await;
        }

        let items = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await
            .unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["item-1", "item-2", "item-3", "item-4", "item-5", "item-6"]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_pages_no_pagination_meta() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [test_item_json("item-1", "Item 1")]
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error_on_subsequent_page() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(
                vec![test_item_json("item-1", "Item 1")],
                1,
                2,
            )))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await;

        match result.unwrap_err() {
            TfeError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("page 2"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_with_existing_query_params() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("search[name]", "test"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(
                vec![test_item_json("item-1", "Filtered Item")],
                1,
                1,
            )))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>(
                "/test-items?search[name]=test",
                "test items",
            )
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Filtered Item");
    }

    #[tokio::test]
    async fn test_fetch_resource_by_path_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/things/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_resource_by_path::<TestItem>("/things/missing", "thing 'missing'")
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
