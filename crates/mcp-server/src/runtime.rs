//! Generic execution of catalog tools against the Orbit API.

use crate::catalog::{ParamLocation, ToolDef};
use orbit_api::envelope::normalize;
use orbit_api::{ApiClient, ApiError};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolCallError {
    /// The caller's arguments do not satisfy the tool's declaration. Raised
    /// before any network I/O.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Execute one tool call: validate arguments, build the HTTP request from the
/// definition, dispatch it, and normalize the response envelope.
///
/// # Errors
///
/// Returns `MissingParameter` when a required argument is absent, or any
/// [`ApiError`] from the underlying request.
pub async fn execute(
    client: &ApiClient,
    def: &ToolDef,
    arguments: &Map<String, Value>,
) -> Result<Value, ToolCallError> {
    let parts = build_request_parts(def, arguments)?;

    tracing::debug!(tool = def.name, method = def.method, path = %parts.path, "executing tool");

    let query: Vec<(&str, String)> = parts
        .query
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect();
    let body = if parts.body.is_empty() {
        None
    } else {
        Some(Value::Object(parts.body))
    };

    let response = client
        .request(def.method, &parts.path, &query, body.as_ref())
        .await?;
    Ok(normalize(response, def.hint))
}

#[derive(Debug)]
struct RequestParts {
    path: String,
    query: Vec<(&'static str, String)>,
    body: Map<String, Value>,
}

fn build_request_parts(
    def: &ToolDef,
    arguments: &Map<String, Value>,
) -> Result<RequestParts, ToolCallError> {
    let mut path = def.path.to_string();
    let mut query: Vec<(&'static str, String)> = Vec::new();
    let mut body: Map<String, Value> = Map::new();

    for param in def.params {
        let value = arguments.get(param.name).filter(|v| !v.is_null());

        if param.required && value.is_none() {
            return Err(ToolCallError::MissingParameter(param.name));
        }
        let Some(value) = value else { continue };

        match param.location {
            ParamLocation::Path => {
                path = path.replace(&format!("{{{}}}", param.name), &value_to_string(value));
            }
            ParamLocation::Query => {
                query.push((param.name, value_to_string(value)));
            }
            ParamLocation::Body => {
                body.insert(param.name.to_string(), value.clone());
            }
        }
    }

    Ok(RequestParts { path, query, body })
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}
