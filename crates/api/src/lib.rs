//! Client for the Orbit hosting control-plane API.
//!
//! This crate is intended to be used by:
//! - `orbit-mcp-server` (the MCP tool surface)
//! - anything else that needs authenticated Orbit API access
//!
//! It intentionally contains **no** MCP protocol logic and **no** tool
//! definitions; it covers authentication, request execution, and response
//! envelope normalization only.

pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;

pub use auth::{Authenticator, Credentials, SessionToken};
pub use client::ApiClient;
pub use config::Config;
pub use error::{ApiError, Result};
