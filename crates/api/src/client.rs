//! Authenticated request execution against the Orbit control plane.

use crate::auth::Authenticator;
use crate::config::Config;
use crate::error::{ApiError, Result};
use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};

/// Authenticated client for the control-plane API.
///
/// Every call acquires a fresh session token, so a long-lived client never
/// holds a stale token. The inner `reqwest::Client` pools connections and is
/// cheap to clone.
pub struct ApiClient {
    config: Config,
    auth: Authenticator,
    client: Client,
}

impl ApiClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = Client::new();
        let auth = Authenticator::with_client(client.clone(), config.clone());
        Ok(Self {
            config,
            auth,
            client,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one authenticated request and decode the response body.
    ///
    /// `path` is joined onto the configured base URL and must start with `/`.
    /// Query pairs are appended as-is; `body` is sent as JSON when present.
    ///
    /// # Errors
    ///
    /// - anything [`Authenticator::login`] can return
    /// - `Network` for an unsupported method or a transport failure
    /// - `Upstream` for a non-2xx API response
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let method = parse_method(method)?;
        let headers = self.auth.headers(None).await?;
        let url = format!("{}{}", self.config.base(), path);

        tracing::debug!(method = %method, path, "dispatching Orbit API request");

        let mut request = self
            .client
            .request(method, &url)
            .headers(headers)
            .timeout(self.config.timeout);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(json!({"success": true, "message": "operation completed"}));
        }

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                body: truncate_body(&text),
            });
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            // Some endpoints answer 200 with an empty or plain-text body.
            Err(_) => Ok(json!({"success": true, "raw": text})),
        }
    }

    /// `GET` with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.request("GET", path, query, None).await
    }

    /// `POST` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request("POST", path, &[], body).await
    }

    /// `PUT` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request("PUT", path, &[], body).await
    }

    /// `PATCH` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request("PATCH", path, &[], body).await
    }

    /// `DELETE`, optionally with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request("DELETE", path, &[], body).await
    }
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        other => Err(ApiError::Network(format!(
            "unsupported HTTP method '{other}'"
        ))),
    }
}

const MAX_ERROR_BODY: usize = 2048;

// Upstream error bodies end up in tool output; keep them bounded.
fn truncate_body(text: &str) -> String {
    if text.len() <= MAX_ERROR_BODY {
        return text.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated)", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post};
    use serde_json::json;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::net::TcpListener;

    fn test_config(api_base: String) -> Config {
        Config {
            email: Some("admin@example.com".to_string()),
            password: Some("hunter2".to_string()),
            api_base,
            timeout: Duration::from_secs(5),
        }
    }

    async fn serve(app: Router) -> (String, tokio::sync::oneshot::Sender<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        tokio::spawn(async move {
            let _ = server.await;
        });
        (format!("http://{addr}"), shutdown_tx)
    }

    async fn login_handler() -> axum::Json<serde_json::Value> {
        axum::Json(json!({"token": "test-token"}))
    }

    #[tokio::test]
    async fn get_attaches_bearer_token_and_query() {
        async fn sites_handler(
            headers: HeaderMap,
            Query(params): Query<HashMap<String, String>>,
        ) -> axum::Json<serde_json::Value> {
            assert_eq!(
                headers.get("authorization").and_then(|v| v.to_str().ok()),
                Some("Bearer test-token")
            );
            assert_eq!(params.get("page").map(String::as_str), Some("2"));
            axum::Json(json!({"result": [{"id": 1}]}))
        }

        let app = Router::new()
            .route("/login", post(login_handler))
            .route("/sites", get(sites_handler));
        let (base, shutdown) = serve(app).await;
        let client = ApiClient::new(test_config(base)).expect("client");

        let value = client
            .get("/sites", &[("page", "2".to_string())])
            .await
            .expect("request");
        assert_eq!(value, json!({"result": [{"id": 1}]}));

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        async fn create_handler(
            axum::Json(body): axum::Json<serde_json::Value>,
        ) -> axum::Json<serde_json::Value> {
            assert_eq!(body["name"], "my-site");
            axum::Json(json!({"id": 42, "name": "my-site"}))
        }

        let app = Router::new()
            .route("/login", post(login_handler))
            .route("/sites", post(create_handler));
        let (base, shutdown) = serve(app).await;
        let client = ApiClient::new(test_config(base)).expect("client");

        let value = client
            .post("/sites", Some(&json!({"name": "my-site"})))
            .await
            .expect("request");
        assert_eq!(value["id"], 42);

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn no_content_becomes_success_envelope() {
        async fn delete_handler() -> StatusCode {
            StatusCode::NO_CONTENT
        }

        let app = Router::new()
            .route("/login", post(login_handler))
            .route("/sites/1", delete(delete_handler));
        let (base, shutdown) = serve(app).await;
        let client = ApiClient::new(test_config(base)).expect("client");

        let value = client.delete("/sites/1", None).await.expect("request");
        assert_eq!(value["success"], true);

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn non_json_success_body_is_wrapped() {
        async fn text_handler() -> &'static str {
            "OK"
        }

        let app = Router::new()
            .route("/login", post(login_handler))
            .route("/ping", get(text_handler));
        let (base, shutdown) = serve(app).await;
        let client = ApiClient::new(test_config(base)).expect("client");

        let value = client.get("/ping", &[]).await.expect("request");
        assert_eq!(value, json!({"success": true, "raw": "OK"}));

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn upstream_failure_carries_status_and_body() {
        async fn broken_handler() -> (StatusCode, &'static str) {
            (StatusCode::INTERNAL_SERVER_ERROR, "database on fire")
        }

        let app = Router::new()
            .route("/login", post(login_handler))
            .route("/sites", get(broken_handler));
        let (base, shutdown) = serve(app).await;
        let client = ApiClient::new(test_config(base)).expect("client");

        let err = client.get("/sites", &[]).await.unwrap_err();
        match err {
            ApiError::Upstream {
                status,
                reason,
                body,
            } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
                assert!(body.contains("database on fire"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }

        let _ = shutdown.send(());
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(parse_method("TRACE").is_err());
        assert!(parse_method("get").is_ok());
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let long = "x".repeat(10_000);
        let out = truncate_body(&long);
        assert!(out.len() < 3000);
        assert!(out.ends_with("(truncated)"));
    }
}
