//! Reply normalization — locates a fenced code block and strict-parses JSON.
//!
//! Two independent pure steps so each failure mode stays predictable:
//! fence location never parses, and parsing never scans for fences.

use serde_json::Value;

/// Returns the interior of the first complete triple-backtick fence,
/// optionally tagged `json`, trimmed. `None` when no closed fence exists.
pub fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let interior = &text[start + 3..];
    let interior = interior.strip_prefix("json").unwrap_or(interior);
    let end = interior.find("```")?;
    Some(interior[..end].trim())
}

/// Strict-parses the fence interior when present, else the whole trimmed
/// reply. `None` when the candidate is not valid JSON — callers decide how
/// to degrade.
pub fn try_parse(reply: &str) -> Option<Value> {
    let candidate = fenced_block(reply).unwrap_or_else(|| reply.trim());
    serde_json::from_str(candidate).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fenced_block_with_json_tag() {
        let reply = "```json\n{\"name\": \"Jane\"}\n```";
        assert_eq!(fenced_block(reply), Some("{\"name\": \"Jane\"}"));
    }

    #[test]
    fn test_fenced_block_without_tag() {
        let reply = "```\n{\"name\": \"Jane\"}\n```";
        assert_eq!(fenced_block(reply), Some("{\"name\": \"Jane\"}"));
    }

    #[test]
    fn test_fenced_block_ignores_surrounding_prose() {
        let reply = "Here is the result:\n```json\n{\"ok\": true}\n```\nHope this helps!";
        assert_eq!(fenced_block(reply), Some("{\"ok\": true}"));
    }

    #[test]
    fn test_fenced_block_requires_closing_fence() {
        let reply = "```json\n{\"name\": \"Jane\"}";
        assert_eq!(fenced_block(reply), None);
    }

    #[test]
    fn test_fenced_block_none_without_fence() {
        assert_eq!(fenced_block("{\"name\": \"Jane\"}"), None);
    }

    #[test]
    fn test_try_parse_extracts_object_from_tagged_fence() {
        let reply = "```json\n{\"name\":\"Jane\"}\n```";
        assert_eq!(try_parse(reply), Some(json!({"name": "Jane"})));
    }

    #[test]
    fn test_try_parse_accepts_bare_json() {
        let reply = "  {\"skills\": [\"Rust\", \"SQL\"]}  ";
        assert_eq!(try_parse(reply), Some(json!({"skills": ["Rust", "SQL"]})));
    }

    #[test]
    fn test_try_parse_accepts_top_level_array() {
        let reply = "```json\n[{\"matchScore\": 85}, {\"matchScore\": 62}]\n```";
        let value = try_parse(reply).unwrap();
        assert_eq!(value, json!([{"matchScore": 85}, {"matchScore": 62}]));
    }

    #[test]
    fn test_try_parse_rejects_prose() {
        let reply = "I could not find any structured data in this resume.";
        assert_eq!(try_parse(reply), None);
    }

    #[test]
    fn test_try_parse_rejects_invalid_fence_interior() {
        let reply = "```json\nname: Jane (not JSON)\n```";
        assert_eq!(try_parse(reply), None);
    }

    #[test]
    fn test_try_parse_rejects_unclosed_fence() {
        // No closing fence: the whole reply is the candidate, and the
        // leading backticks make it invalid JSON.
        let reply = "```json\n{\"name\": \"Jane\"}";
        assert_eq!(try_parse(reply), None);
    }

    #[test]
    fn test_try_parse_is_strict_about_trailing_garbage() {
        let reply = "{\"name\": \"Jane\"} trailing words";
        assert_eq!(try_parse(reply), None);
    }
}
