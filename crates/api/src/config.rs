//! Process configuration for Orbit API access.
//!
//! Read once at startup and passed in explicitly; nothing in this crate
//! consults the environment after construction.

use crate::error::{ApiError, Result};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://control.orbit.host/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Default account email. Optional: callers may supply per-call
    /// credentials instead.
    pub email: Option<String>,
    /// Default account password. Absence only surfaces as
    /// `MissingCredentials` when a request is attempted.
    pub password: Option<String>,
    /// Base URL of the control-plane API, without a trailing slash.
    pub api_base: String,
    /// Bound applied to every outbound request (login included).
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: None,
            password: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from `ORBIT_*` environment variables, falling back
    /// to defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("ORBIT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            email: std::env::var("ORBIT_EMAIL").ok().filter(|v| !v.is_empty()),
            password: std::env::var("ORBIT_PASSWORD")
                .ok()
                .filter(|v| !v.is_empty()),
            api_base: std::env::var("ORBIT_API_BASE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Validate the non-credential fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ApiError::Network(format!(
                "invalid API base URL '{}': expected an http(s) URL",
                self.api_base
            )));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::Network(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    #[must_use]
    pub fn base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        Config::default().validate().expect("default is valid");
    }

    #[test]
    fn rejects_non_http_base() {
        let cfg = Config {
            api_base: "ftp://control.orbit.host".to_string(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let cfg = Config {
            timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    // Touches the ORBIT_* process environment; keep all env assertions in
    // this one test so parallel tests cannot race on the variables.
    #[test]
    fn from_env_filters_empty_values_and_bad_timeouts() {
        unsafe {
            std::env::set_var("ORBIT_EMAIL", "ops@example.com");
            std::env::set_var("ORBIT_PASSWORD", "");
            std::env::set_var("ORBIT_API_BASE", "https://alt.orbit.host/api/v2");
            std::env::set_var("ORBIT_TIMEOUT_SECS", "not-a-number");
        }

        let cfg = Config::from_env();
        assert_eq!(cfg.email.as_deref(), Some("ops@example.com"));
        // Empty strings count as unset.
        assert_eq!(cfg.password, None);
        assert_eq!(cfg.api_base, "https://alt.orbit.host/api/v2");
        // Unparsable timeout falls back to the default.
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        unsafe {
            std::env::remove_var("ORBIT_EMAIL");
            std::env::remove_var("ORBIT_PASSWORD");
            std::env::remove_var("ORBIT_API_BASE");
            std::env::remove_var("ORBIT_TIMEOUT_SECS");
        }

        let cfg = Config::from_env();
        assert_eq!(cfg.email, None);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn base_strips_trailing_slash() {
        let cfg = Config {
            api_base: "https://control.orbit.host/api/v1/".to_string(),
            ..Config::default()
        };
        assert_eq!(cfg.base(), "https://control.orbit.host/api/v1");
    }
}
