// HTTP API client with optional mock interception
use std::time::Duration;

use reqwest::Client as ReqwestClient;
use serde_json::Value;
use shopharness_common::mock::{MockMethod, RouteRegistry};
use shopharness_common::HarnessError;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{ClientError, ClientResult};
use crate::response::{ApiResponse, ParsedBody};

const DEFAULT_API_BASE_URL: &str = "https://automationexercise.com/api";
const DEFAULT_USER_AGENT: &str = concat!("shopharness/", env!("CARGO_PKG_VERSION"));

/// What to do with a request no mock route matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockMode {
    /// Fall through to the real transport.
    #[default]
    Passthrough,
    /// Fail the request; useful for fully isolated tests.
    Strict,
}

/// Client for the store's REST API.
///
/// Every request is checked against the attached [`RouteRegistry`] (if
/// any) before touching the network; a matching route answers with its
/// canned response, including any simulated latency.
#[derive(Debug)]
pub struct ApiClient {
    http: ReqwestClient,
    api_base_url: String,
    mocks: Option<RouteRegistry>,
    mock_mode: MockMode,
}

impl ApiClient {
    /// Start building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Client configured from the harness environment.
    pub fn from_config(config: &HarnessConfig) -> ClientResult<Self> {
        Self::builder()
            .api_base_url(config.api_base_url.as_str())
            .timeout(config.request_timeout)
            .build()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Attach a mock registry. Fails with a setup error if one is already
    /// attached; detach it first.
    pub fn install_mocks(&mut self, registry: RouteRegistry) -> ClientResult<()> {
        if self.mocks.is_some() {
            return Err(HarnessError::setup("a mock registry is already attached").into());
        }
        debug!(routes = registry.len(), "attaching mock registry");
        self.mocks = Some(registry);
        Ok(())
    }

    /// Detach the mock registry, returning it so a test can inspect or
    /// reuse it. Fails with a setup error if none is attached.
    pub fn detach_mocks(&mut self) -> ClientResult<RouteRegistry> {
        match self.mocks.take() {
            Some(registry) => {
                debug!("detached mock registry");
                Ok(registry)
            }
            None => Err(HarnessError::setup("no mock registry is attached").into()),
        }
    }

    /// Change how unmatched requests are handled while mocks are attached.
    pub fn set_mock_mode(&mut self, mode: MockMode) {
        self.mock_mode = mode;
    }

    /// GET with optional query parameters.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<ApiResponse> {
        let url = self.url_for(path);
        if let Some(mocked) = self.try_mock(MockMethod::Get, &url).await? {
            return Ok(mocked);
        }
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch("GET", &url, request).await
    }

    /// POST with a JSON body.
    pub async fn post_json(&self, path: &str, body: &Value) -> ClientResult<ApiResponse> {
        let url = self.url_for(path);
        if let Some(mocked) = self.try_mock(MockMethod::Post, &url).await? {
            return Ok(mocked);
        }
        self.dispatch("POST", &url, self.http.post(&url).json(body)).await
    }

    /// POST with form-encoded fields.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, String)],
    ) -> ClientResult<ApiResponse> {
        let url = self.url_for(path);
        if let Some(mocked) = self.try_mock(MockMethod::Post, &url).await? {
            return Ok(mocked);
        }
        self.dispatch("POST", &url, self.http.post(&url).form(fields)).await
    }

    /// PUT with a JSON body.
    pub async fn put_json(&self, path: &str, body: &Value) -> ClientResult<ApiResponse> {
        let url = self.url_for(path);
        if let Some(mocked) = self.try_mock(MockMethod::Put, &url).await? {
            return Ok(mocked);
        }
        self.dispatch("PUT", &url, self.http.put(&url).json(body)).await
    }

    /// PUT with form-encoded fields.
    pub async fn put_form(
        &self,
        path: &str,
        fields: &[(&str, String)],
    ) -> ClientResult<ApiResponse> {
        let url = self.url_for(path);
        if let Some(mocked) = self.try_mock(MockMethod::Put, &url).await? {
            return Ok(mocked);
        }
        self.dispatch("PUT", &url, self.http.put(&url).form(fields)).await
    }

    /// DELETE with form-encoded fields.
    pub async fn delete_form(
        &self,
        path: &str,
        fields: &[(&str, String)],
    ) -> ClientResult<ApiResponse> {
        let url = self.url_for(path);
        if let Some(mocked) = self.try_mock(MockMethod::Delete, &url).await? {
            return Ok(mocked);
        }
        self.dispatch("DELETE", &url, self.http.delete(&url).form(fields)).await
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Answer from the mock registry when a route matches. In strict mode
    /// an unmatched request is a setup error instead of a network call.
    async fn try_mock(&self, method: MockMethod, url: &str) -> ClientResult<Option<ApiResponse>> {
        let Some(registry) = &self.mocks else {
            return Ok(None);
        };
        if let Some(route) = registry.match_route(method, url) {
            debug!(%method, url, status = route.status, "answering from mock route");
            let mock = route.respond().await;
            return Ok(Some(ApiResponse {
                status: mock.status,
                body: ParsedBody::parse(&mock.body),
            }));
        }
        match self.mock_mode {
            MockMode::Passthrough => Ok(None),
            MockMode::Strict => {
                Err(HarnessError::setup(format!("no mock route matched {method} {url}")).into())
            }
        }
    }

    async fn dispatch(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<ApiResponse> {
        debug!(method, url, "sending API request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(method, url, status, "received API response");
        Ok(ApiResponse { status, body: ParsedBody::parse(&text) })
    }
}

/// Builder for [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    api_base_url: String,
    timeout: Duration,
    user_agent: String,
    mock_mode: MockMode,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            mock_mode: MockMode::default(),
        }
    }
}

impl ApiClientBuilder {
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        // Normalized so url_for can always just append the path
        while url.ends_with('/') {
            url.pop();
        }
        self.api_base_url = url;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn mock_mode(mut self, mode: MockMode) -> Self {
        self.mock_mode = mode;
        self
    }

    pub fn build(self) -> ClientResult<ApiClient> {
        let http = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(ClientError::Http)?;

        Ok(ApiClient {
            http,
            api_base_url: self.api_base_url,
            mocks: None,
            mock_mode: self.mock_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shopharness_common::mock::{MockRoute, UrlMatcher};

    use super::*;

    fn brands_route() -> MockRoute {
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::exact("/brandsList"),
            200,
            json!({"brands": [{"id": 1, "brand": "Polo"}]}),
        )
    }

    #[test]
    fn builder_normalizes_trailing_slashes() {
        let client = ApiClient::builder()
            .api_base_url("http://localhost:9/api/")
            .build()
            .unwrap();
        assert_eq!(client.api_base_url(), "http://localhost:9/api");
    }

    #[test]
    fn install_twice_is_a_setup_error() {
        let mut client = ApiClient::builder().build().unwrap();
        client.install_mocks(RouteRegistry::new()).unwrap();

        let err = client.install_mocks(RouteRegistry::new()).unwrap_err();
        assert!(matches!(err, ClientError::Common(HarnessError::Setup(_))));
    }

    #[test]
    fn detach_without_attach_is_a_setup_error() {
        let mut client = ApiClient::builder().build().unwrap();
        let err = client.detach_mocks().unwrap_err();
        assert!(matches!(err, ClientError::Common(HarnessError::Setup(_))));
    }

    /// A matched route answers without network I/O: the base URL points at
    /// a port nothing listens on, so any real request would fail.
    #[tokio::test]
    async fn matched_route_answers_without_network() {
        let mut client =
            ApiClient::builder().api_base_url("http://127.0.0.1:9/api").build().unwrap();
        let mut registry = RouteRegistry::new();
        registry.add_route(brands_route());
        client.install_mocks(registry).unwrap();

        let response = client.get("/brandsList", &[]).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body.json().unwrap()["brands"][0]["brand"], "Polo");
    }

    /// Method filters apply during interception: a POST to a GET-mocked
    /// path is unmatched and, in strict mode, a setup error.
    #[tokio::test]
    async fn strict_mode_rejects_unmatched_requests() {
        let mut client = ApiClient::builder()
            .api_base_url("http://127.0.0.1:9/api")
            .mock_mode(MockMode::Strict)
            .build()
            .unwrap();
        let mut registry = RouteRegistry::new();
        registry.add_route(brands_route());
        client.install_mocks(registry).unwrap();

        let err = client.post_json("/brandsList", &json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Common(HarnessError::Setup(_))));
    }

    /// Clearing the registry through detach + clear makes previously
    /// mocked patterns miss.
    #[tokio::test]
    async fn cleared_registry_no_longer_matches() {
        let mut client = ApiClient::builder()
            .api_base_url("http://127.0.0.1:9/api")
            .mock_mode(MockMode::Strict)
            .build()
            .unwrap();
        let mut registry = RouteRegistry::new();
        registry.add_route(brands_route());
        client.install_mocks(registry).unwrap();

        let mut registry = client.detach_mocks().unwrap();
        registry.clear();
        client.install_mocks(registry).unwrap();

        let err = client.get("/brandsList", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Common(HarnessError::Setup(_))));
    }
}
