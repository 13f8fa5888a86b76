//! Composite site health report.
//!
//! Unlike catalog tools this combines two reporting calls (request totals
//! and firewall events over the last 24h) and scores the result locally,
//! so it is wired into the service beside the catalog rather than through
//! a `ToolDef`.

use crate::runtime::ToolCallError;
use crate::semantics::annotations_for_method;
use orbit_api::ApiClient;
use orbit_api::envelope::normalize;
use rmcp::model::{JsonObject, Tool};
use serde_json::{Map, Value, json};
use std::sync::Arc;

pub const TOOL_NAME: &str = "get_site_health_report";

/// The MCP advertisement for the health-report tool.
#[must_use]
pub fn tool() -> Tool {
    let schema = json!({
        "type": "object",
        "properties": {
            "site_id": {
                "type": "string",
                "description": "Identifier of the site",
            },
            "include_recommendations": {
                "type": "boolean",
                "description": "Include optimization recommendations, defaults to true",
            },
        },
        "required": ["site_id"],
    });
    let schema_obj = schema.as_object().cloned().unwrap_or_else(JsonObject::new);
    let mut tool = Tool::new(
        TOOL_NAME,
        "Get a combined health report for a site: error rate, response time, and recent security events",
        Arc::new(schema_obj),
    );
    tool.annotations = Some(annotations_for_method("GET"));
    tool
}

/// Fetch the underlying reports and produce the scored summary.
///
/// # Errors
///
/// Returns `MissingParameter` when `site_id` is absent, or any `ApiError`
/// from the two reporting calls.
pub async fn report(
    client: &ApiClient,
    arguments: &Map<String, Value>,
) -> Result<Value, ToolCallError> {
    let site_id = arguments
        .get("site_id")
        .and_then(Value::as_str)
        .ok_or(ToolCallError::MissingParameter("site_id"))?;
    let include_recommendations = arguments
        .get("include_recommendations")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let period = [("period", "24h".to_string())];
    let requests = normalize(
        client
            .get(&format!("/sites/{site_id}/reporting/total-requests"), &period)
            .await
            .map_err(ToolCallError::Api)?,
        None,
    );
    let waf_events = normalize(
        client
            .get(&format!("/sites/{site_id}/reporting/waf-eventlist"), &period)
            .await
            .map_err(ToolCallError::Api)?,
        None,
    );

    Ok(score(site_id, &requests, &waf_events, include_recommendations))
}

#[allow(clippy::cast_precision_loss)]
fn score(site_id: &str, requests: &Value, waf_events: &Value, with_recommendations: bool) -> Value {
    let total = requests
        .get("total_requests")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let server_errors = requests
        .get("status_5xx")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let avg_response_ms = requests
        .get("avg_response_time")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let security_events = waf_events.as_array().map_or(0, Vec::len);

    let error_rate = (server_errors as f64 / total.max(1) as f64) * 100.0;

    let mut health_score: i64 = 100;
    let mut issues: Vec<String> = Vec::new();
    let mut recommendations: Vec<&str> = Vec::new();

    if error_rate > 1.0 {
        health_score -= 20;
        issues.push(format!("High error rate: {error_rate:.1}%"));
        recommendations.push("Investigate server errors in the access logs");
    }
    if security_events > 100 {
        health_score -= 10;
        issues.push(format!("High security event count: {security_events}"));
        recommendations.push("Review WAF rules and consider stricter settings");
    }
    if avg_response_ms > 1000 {
        health_score -= 15;
        issues.push(format!("Slow response time: {avg_response_ms}ms"));
        recommendations.push("Consider enabling more aggressive caching");
    }

    let status = if health_score >= 90 {
        "excellent"
    } else if health_score >= 70 {
        "good"
    } else {
        "needs attention"
    };

    json!({
        "site_id": site_id,
        "health_score": health_score,
        "status": status,
        "issues": issues,
        "recommendations": if with_recommendations { recommendations } else { Vec::new() },
        "metrics": {
            "avg_response_time": format!("{avg_response_ms}ms"),
            "error_rate": format!("{error_rate:.2}%"),
            "security_events_24h": security_events,
            "total_requests_24h": total,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_metrics_score_excellent() {
        let requests = json!({"total_requests": 1000, "status_5xx": 0, "avg_response_time": 120});
        let out = score("42", &requests, &json!([]), true);
        assert_eq!(out["health_score"], 100);
        assert_eq!(out["status"], "excellent");
        assert_eq!(out["issues"], json!([]));
    }

    #[test]
    fn error_rate_and_latency_lower_the_score() {
        let requests = json!({"total_requests": 100, "status_5xx": 5, "avg_response_time": 1500});
        let out = score("42", &requests, &json!([]), true);
        assert_eq!(out["health_score"], 65);
        assert_eq!(out["status"], "needs attention");
        assert_eq!(out["issues"].as_array().map(Vec::len), Some(2));
        assert!(!out["recommendations"].as_array().map(Vec::is_empty).unwrap_or(true));
    }

    #[test]
    fn recommendations_can_be_suppressed() {
        let requests = json!({"total_requests": 100, "status_5xx": 50, "avg_response_time": 10});
        let out = score("42", &requests, &json!([]), false);
        assert_eq!(out["recommendations"], json!([]));
        assert!(!out["issues"].as_array().map(Vec::is_empty).unwrap_or(true));
    }

    #[test]
    fn heavy_waf_traffic_is_flagged() {
        let events: Vec<Value> = (0..150).map(|i| json!({"id": i})).collect();
        let requests = json!({"total_requests": 100, "status_5xx": 0, "avg_response_time": 100});
        let out = score("42", &requests, &Value::Array(events), true);
        assert_eq!(out["health_score"], 90);
        assert_eq!(out["metrics"]["security_events_24h"], 150);
    }

    #[test]
    fn advertisement_requires_site_id() {
        let tool = tool();
        assert_eq!(tool.name, TOOL_NAME);
        let schema = tool.input_schema.as_ref();
        assert_eq!(schema["required"], json!(["site_id"]));
        let annotations = tool.annotations.expect("annotations");
        assert_eq!(annotations.read_only_hint, Some(true));
    }
}
