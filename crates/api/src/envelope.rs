//! Response envelope normalization.
//!
//! The upstream server wraps payloads differently depending on endpoint and
//! authentication mode: bare arrays, `{"result": ...}`, `{"data": [...]}`,
//! or a legacy endpoint-specific key such as `{"sites": [...]}`. Rather than
//! branching on auth mode (which the client cannot reliably know), shapes
//! are probed in a fixed precedence order.
//!
//! `result` is checked before `data`: wrapper-mode responses may also carry
//! an unrelated `data` field, and the reverse order produces wrong payloads
//! on legacy endpoints.

use serde_json::Value;

/// Extract the canonical payload from a decoded response body.
///
/// Total over all JSON shapes: anything unrecognized (scalars, `null`,
/// objects without a known wrapper key) degrades to an empty array so
/// callers can always iterate the result.
///
/// The value found under a wrapper key is passed through as-is; it may be a
/// sequence or a single object.
#[must_use]
pub fn normalize(body: Value, hint: Option<&str>) -> Value {
    match body {
        Value::Array(_) => body,
        Value::Object(mut map) => {
            if let Some(v) = map.remove("result") {
                return v;
            }
            if let Some(v) = map.remove("data") {
                return v;
            }
            if let Some(key) = hint {
                if let Some(v) = map.remove(key) {
                    return v;
                }
            }
            Value::Array(Vec::new())
        }
        _ => Value::Array(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use serde_json::{Value, json};

    #[test]
    fn bare_array_is_returned_unchanged() {
        let body = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(normalize(body.clone(), None), body);
    }

    #[test]
    fn result_wrapper_wins_even_when_data_is_present() {
        let body = json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": [{"id": 1}, {"id": 2}],
            "data": {"unrelated": true}
        });
        assert_eq!(normalize(body, None), json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn result_wrapper_passes_objects_through_without_coercion() {
        let body = json!({"result": {"id": 7, "name": "blog"}});
        assert_eq!(normalize(body, None), json!({"id": 7, "name": "blog"}));
    }

    #[test]
    fn data_wrapper_applies_when_result_is_absent() {
        let body = json!({"data": [{"id": 3}]});
        assert_eq!(normalize(body, None), json!([{"id": 3}]));
    }

    #[test]
    fn hint_key_applies_last_among_wrappers() {
        let body = json!({"sites": [{"id": 9}], "count": 1});
        assert_eq!(normalize(body, Some("sites")), json!([{"id": 9}]));
    }

    #[test]
    fn hint_key_does_not_shadow_result() {
        let body = json!({"result": [{"id": 1}], "sites": [{"id": 2}]});
        assert_eq!(normalize(body, Some("sites")), json!([{"id": 1}]));
    }

    #[test]
    fn unrecognized_object_degrades_to_empty_array() {
        let body = json!({"success": true, "message": "ok"});
        assert_eq!(normalize(body, None), json!([]));
        let body = json!({"success": true, "message": "ok"});
        assert_eq!(normalize(body, Some("sites")), json!([]));
    }

    #[test]
    fn scalars_and_null_degrade_to_empty_array() {
        assert_eq!(normalize(Value::Null, None), json!([]));
        assert_eq!(normalize(json!(42), None), json!([]));
        assert_eq!(normalize(json!("string"), None), json!([]));
        assert_eq!(normalize(json!(true), None), json!([]));
    }

    #[test]
    fn already_normalized_arrays_are_fixed_points() {
        let items = json!([{"id": 1}]);
        let once = normalize(items.clone(), Some("sites"));
        assert_eq!(once, items);
        assert_eq!(normalize(once, Some("sites")), items);
    }
}
