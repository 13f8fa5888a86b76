//! Authentication against the Orbit control plane.
//!
//! Single-shot: every invocation performs one login call and hands back a
//! token valid for exactly one request. Nothing is cached, so there is no
//! expiry tracking and no refresh race. Callers that need retry re-invoke.

use crate::config::Config;
use crate::error::{ApiError, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use std::fmt;
use std::time::Instant;

/// An identifier/secret pair for the login endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The secret must never reach logs.
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// A bearer token scoped to one in-flight request.
pub struct SessionToken {
    token: String,
    acquired: Instant,
}

impl SessionToken {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            acquired: Instant::now(),
        }
    }

    #[must_use]
    pub fn acquired(&self) -> Instant {
        self.acquired
    }

    /// Header set for one authenticated request: bearer token plus standard
    /// JSON content/accept headers.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the token contains bytes that are
    /// not valid in an HTTP header.
    pub fn headers(&self) -> Result<HeaderMap> {
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
            ApiError::AuthenticationFailed("token is not a valid header value".to_string())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"***")
            .field("acquired", &self.acquired)
            .finish()
    }
}

/// Exchanges credentials for a bearer token.
///
/// Stateless between calls; safe to share behind an `Arc`.
pub struct Authenticator {
    client: Client,
    config: Config,
}

impl Authenticator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub(crate) fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Resolve the effective credentials: per-call override first, then the
    /// process configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` when neither source supplies both
    /// fields. No network call is made on that path.
    fn resolve_credentials(&self, overrides: Option<&Credentials>) -> Result<Credentials> {
        if let Some(creds) = overrides {
            return Ok(creds.clone());
        }
        match (&self.config.email, &self.config.password) {
            (Some(email), Some(password)) => Ok(Credentials {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => Err(ApiError::MissingCredentials),
        }
    }

    /// Log in and return a fresh session token.
    ///
    /// # Errors
    ///
    /// - `MissingCredentials` if no credential source is available
    /// - `AuthenticationFailed` on a non-2xx login response or a body
    ///   without a `token` field
    /// - `Network` if the login call cannot complete
    pub async fn login(&self, overrides: Option<&Credentials>) -> Result<SessionToken> {
        let creds = self.resolve_credentials(overrides)?;
        let url = format!("{}/login", self.config.base());

        tracing::debug!(email = %creds.email, "logging in to Orbit control plane");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&json!({
                "email": creds.email,
                "password": creds.password,
            }))
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthenticationFailed(
                "invalid email or password".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(ApiError::AuthenticationFailed(format!(
                "login returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body: Value = response.json().await.map_err(|_| {
            ApiError::AuthenticationFailed("login response was not valid JSON".to_string())
        })?;
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ApiError::AuthenticationFailed(
                    "login response did not contain a token".to_string(),
                )
            })?;

        Ok(SessionToken::new(token))
    }

    /// Log in and return the header set for one authenticated request.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Authenticator::login`].
    pub async fn headers(&self, overrides: Option<&Credentials>) -> Result<HeaderMap> {
        self.login(overrides).await?.headers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::json;
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

    #[tokio::test]
    async fn login_returns_bearer_headers() {
        async fn login_handler(
            axum::Json(body): axum::Json<serde_json::Value>,
        ) -> axum::Json<serde_json::Value> {
            assert_eq!(body["email"], "admin@example.com");
            assert_eq!(body["password"], "hunter2");
            axum::Json(json!({"token": "abc123"}))
        }

        let (base, shutdown) = serve(Router::new().route("/login", post(login_handler))).await;
        let auth = Authenticator::new(test_config(base));

        let headers = auth.headers(None).await.expect("headers");
        assert_eq!(
            headers.get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer abc123")
        );
        assert_eq!(
            headers.get("content-type").and_then(|v| v.to_str().ok()),
            Some("application/json")
        );

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn rejected_credentials_fail_with_authentication_error() {
        async fn login_handler() -> StatusCode {
            StatusCode::UNAUTHORIZED
        }

        let (base, shutdown) = serve(Router::new().route("/login", post(login_handler))).await;
        let auth = Authenticator::new(test_config(base));

        let err = auth.login(None).await.unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationFailed(_)));
        assert!(err.to_string().contains("invalid email or password"));

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn token_missing_from_login_body_is_an_authentication_error() {
        async fn login_handler() -> axum::Json<serde_json::Value> {
            axum::Json(json!({"success": true}))
        }

        let (base, shutdown) = serve(Router::new().route("/login", post(login_handler))).await;
        let auth = Authenticator::new(test_config(base));

        let err = auth.login(None).await.unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationFailed(_)));

        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_any_network_call() {
        // A base URL that would refuse connections if it were ever contacted.
        let config = Config {
            email: None,
            password: None,
            api_base: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(5),
        };
        let auth = Authenticator::new(config);

        let err = auth.login(None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingCredentials));
    }

    #[tokio::test]
    async fn per_call_credentials_override_configuration() {
        async fn login_handler(
            axum::Json(body): axum::Json<serde_json::Value>,
        ) -> axum::Json<serde_json::Value> {
            assert_eq!(body["email"], "other@example.com");
            axum::Json(json!({"token": "t-override"}))
        }

        let (base, shutdown) = serve(Router::new().route("/login", post(login_handler))).await;
        let auth = Authenticator::new(test_config(base));

        let creds = Credentials {
            email: "other@example.com".to_string(),
            password: "pw".to_string(),
        };
        let token = auth.login(Some(&creds)).await.expect("login");
        let headers = token.headers().expect("headers");
        assert_eq!(
            headers.get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer t-override")
        );

        let _ = shutdown.send(());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = Credentials {
            email: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("hunter2"));

        let token = SessionToken::new("abc123");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("abc123"));
    }
}
