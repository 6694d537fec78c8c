//! HTTP client for the external backend behind the proxy routes.
//!
//! Every call is a single best-effort attempt: no retries. The upstream
//! status and JSON body are returned as-is so the proxy layer can pass
//! them through; a body that fails to parse as JSON becomes an empty
//! object rather than an error.

use crate::{ClientError, ClientResult};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method};
use serde_json::{Value, json};

/// Client for the backend REST API.
pub struct UpstreamClient {
    pub base_url: String,
    api_token: Option<String>,
    client: ReqwestClient,
}

/// Status and body of an upstream reply, passed through verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:9000")
    /// * `api_token` - Optional token sent as `Authorization: Bearer`
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_token: Option<&str>, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.map(String::from),
            client,
        })
    }

    /// Build a request with the optional bearer token attached.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.api_token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request, returning status and body verbatim.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<UpstreamResponse> {
        let response = req.send().await?;
        let status = response.status().as_u16();

        // Empty or non-JSON bodies collapse to an empty object.
        let body: Value = response.json().await.unwrap_or_else(|_| json!({}));

        if status >= 400 {
            log::warn!("Upstream replied {status}");
        }

        Ok(UpstreamResponse { status, body })
    }

    // =========================================================================
    // Visitor Operations
    // =========================================================================

    /// Update a visitor record.
    pub async fn update_visitor(&self, id: &str, body: &Value) -> ClientResult<UpstreamResponse> {
        let req = self
            .request(Method::PUT, &format!("api/visitor/{id}"))
            .json(body);
        self.execute(req).await
    }

    /// Delete a visitor record.
    pub async fn delete_visitor(&self, id: &str) -> ClientResult<UpstreamResponse> {
        let req = self.request(Method::DELETE, &format!("api/visitor/{id}"));
        self.execute(req).await
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Register an account for an accepted freelancer.
    pub async fn register_account(&self, body: &Value) -> ClientResult<UpstreamResponse> {
        let req = self.request(Method::POST, "api/auth/register").json(body);
        self.execute(req).await
    }

    /// Verify a freshly registered account.
    pub async fn verify_account(&self, body: &Value) -> ClientResult<UpstreamResponse> {
        let req = self.request(Method::POST, "api/auth/verify").json(body);
        self.execute(req).await
    }

    /// Log an account in.
    pub async fn login(&self, body: &Value) -> ClientResult<UpstreamResponse> {
        let req = self.request(Method::POST, "api/auth/login").json(body);
        self.execute(req).await
    }

    // =========================================================================
    // Project & Checkout Operations
    // =========================================================================

    /// Submit a project request.
    pub async fn submit_project(&self, body: &Value) -> ClientResult<UpstreamResponse> {
        let req = self.request(Method::POST, "api/projects").json(body);
        self.execute(req).await
    }

    /// Create a checkout session for the payment hand-off.
    pub async fn create_checkout_session(&self, body: &Value) -> ClientResult<UpstreamResponse> {
        let req = self
            .request(Method::POST, "api/checkout/session")
            .json(body);
        self.execute(req).await
    }
}
