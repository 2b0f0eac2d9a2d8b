//! Defensive JSON extraction from loosely structured model output.
//!
//! The capability is instructed to answer with only a JSON object, but
//! real responses routinely prepend and append commentary. This scans
//! the raw text for the first substring that parses as a JSON object
//! and ignores everything around it.

use serde_json::Value;

/// Find the first well-formed JSON object embedded in `raw`.
/// Returns `None` when no candidate parses.
pub fn first_json_object(raw: &str) -> Option<Value> {
    for (start, _) in raw.match_indices('{') {
        // The stream deserializer parses one value and stops, so
        // trailing commentary after the object doesn't matter.
        let mut stream = serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Value>();
        if let Some(Ok(value)) = stream.next()
            && value.is_object()
        {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_object_parses() {
        let v = first_json_object(r#"{"nodes":[],"edges":[]}"#).unwrap();
        assert_eq!(v, json!({ "nodes": [], "edges": [] }));
    }

    #[test]
    fn surrounding_commentary_ignored() {
        let raw = r#"here you go: {"nodes":[{"id":"a"}],"edges":[]} thanks"#;
        let v = first_json_object(raw).unwrap();
        assert_eq!(v["nodes"][0]["id"], "a");
    }

    #[test]
    fn markdown_fences_ignored() {
        let raw = "Sure!\n```json\n{\"nodes\": [], \"edges\": []}\n```\n";
        assert!(first_json_object(raw).is_some());
    }

    #[test]
    fn braces_inside_strings_do_not_confuse() {
        let raw = r#"note: {"nodes":[{"id":"a","label":"weird } { label"}],"edges":[]}"#;
        let v = first_json_object(raw).unwrap();
        assert_eq!(v["nodes"][0]["label"], "weird } { label");
    }

    #[test]
    fn unbalanced_prefix_skipped() {
        // The first `{` never closes; the second candidate parses.
        let raw = r#"{ broken ... {"edges":[],"nodes":[]}"#;
        let v = first_json_object(raw).unwrap();
        assert!(v.get("nodes").is_some());
    }

    #[test]
    fn no_object_yields_none() {
        assert_eq!(first_json_object("sorry, I cannot help with that"), None);
        assert_eq!(first_json_object("[1, 2, 3]"), None);
        assert_eq!(first_json_object(""), None);
    }
}
