//! MCP server exposing the Orbit hosting control plane as callable tools.
//!
//! Tools are declared once in [`catalog`] as static definitions (HTTP method,
//! path template, parameters, response hint) and executed by a single generic
//! [`runtime`]. Adding an endpoint means adding a table entry, not a handler.

pub mod catalog;
pub mod health;
pub mod report;
pub mod runtime;
pub mod semantics;
pub mod service;

pub use service::OrbitMcpServer;
