//! MCP `ToolAnnotations` for catalog tools.

use rmcp::model::ToolAnnotations;

/// Map a catalog HTTP method to MCP behavior hints.
///
/// Hints follow RFC 9110 method semantics. Every tool gets
/// `openWorldHint`: each one reaches the remote control plane. The catalog
/// restricts itself to the five methods below, so an unrecognized method
/// carries no hints beyond open-world.
#[must_use]
pub fn annotations_for_method(method: &str) -> ToolAnnotations {
    let (read_only_hint, destructive_hint, idempotent_hint) = match method {
        "GET" => (Some(true), Some(false), Some(true)),
        "POST" => (Some(false), Some(false), Some(false)),
        "PUT" | "DELETE" => (Some(false), Some(true), Some(true)),
        // Whether a PATCH endpoint is idempotent depends on the endpoint.
        "PATCH" => (Some(false), Some(true), None),
        _ => (None, None, None),
    };

    ToolAnnotations {
        title: None,
        read_only_hint,
        destructive_hint,
        idempotent_hint,
        open_world_hint: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::annotations_for_method;
    use crate::catalog;

    #[test]
    fn every_catalog_method_is_open_world() {
        for def in catalog::all() {
            let a = annotations_for_method(def.method);
            assert_eq!(a.open_world_hint, Some(true), "tool {}", def.name);
        }
    }

    #[test]
    fn reads_and_writes_split_on_method() {
        for def in catalog::all() {
            let a = annotations_for_method(def.method);
            assert_eq!(
                a.read_only_hint,
                Some(def.method == "GET"),
                "tool {} ({})",
                def.name,
                def.method
            );
        }
    }

    #[test]
    fn delete_is_destructive_and_idempotent() {
        let a = annotations_for_method("DELETE");
        assert_eq!(a.destructive_hint, Some(true));
        assert_eq!(a.idempotent_hint, Some(true));
    }

    #[test]
    fn patch_leaves_idempotence_unknown() {
        assert_eq!(annotations_for_method("PATCH").idempotent_hint, None);
    }
}
