// ABOUTME: Extracts the JSON meal plan object from free-text model completions
// ABOUTME: Greedy first-brace to last-brace match followed by an untyped JSON parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

/// Get compiled JSON object regex (cached)
///
/// Matches from the first `{` to the last `}` across newlines.
fn json_object_regex() -> Option<&'static Regex> {
    static JSON_OBJECT_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    JSON_OBJECT_REGEX
        .get_or_init(|| Regex::new(r"(?s)\{.*\}").ok())
        .as_ref()
}

/// Slice of `text` spanning the first `{` to the last `}`, if any
#[must_use]
pub fn find_json_object(text: &str) -> Option<&str> {
    json_object_regex()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
}

/// Extract and parse the embedded JSON object
///
/// The parsed value is not checked against the meal plan shape. Returns
/// `None` when no object is found, when the slice is not valid JSON, or when
/// it parses to something other than an object.
#[must_use]
pub fn extract_json(text: &str) -> Option<Value> {
    let Some(candidate) = find_json_object(text) else {
        debug!("No JSON object found in completion");
        return None;
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "Completion JSON failed to parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let text = "Here is your plan:\n```json\n{\"dailyTargets\": {\"calories\": 2000}}\n```\nEnjoy!";
        assert_eq!(
            extract_json(text),
            Some(json!({"dailyTargets": {"calories": 2000}}))
        );
    }

    #[test]
    fn test_nested_objects_use_outermost_braces() {
        let text = r#"{"a": {"b": {"c": 1}}} trailing"#;
        assert_eq!(find_json_object(text), Some(r#"{"a": {"b": {"c": 1}}}"#));
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(extract_json("I cannot help with that."), None);
    }

    #[test]
    fn test_malformed_between_braces() {
        assert_eq!(extract_json("{ \"mealPlan\": { day1: oops }"), None);
    }

    #[test]
    fn test_two_objects_span_is_invalid() {
        // First `{` to last `}` covers both objects, which is not one JSON value
        assert_eq!(extract_json(r#"{"a": 1} and {"b": 2}"#), None);
    }

    #[test]
    fn test_wrong_shape_passes_through() {
        assert_eq!(
            extract_json(r#"{"unexpected": [1, 2, 3]}"#),
            Some(json!({"unexpected": [1, 2, 3]}))
        );
    }
}
