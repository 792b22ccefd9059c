//! Log sanitization utilities
//!
//! Request and response bodies carry passwords and secret payloads; these helpers
//! keep them from being fully exposed in debug/error logs.

use serde_json::Value;

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder written in place of redacted values.
const REDACTED: &str = "***";

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) with the total length appended.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Describe a body by size only, for bodies that may hold secret payloads.
pub fn describe_body(s: &str) -> String {
    format!("<{} bytes>", s.len())
}

/// Render a JSON value for logging with the given keys masked at any depth.
pub fn redact_json(value: &Value, keys: &[&str]) -> String {
    let mut copy = value.clone();
    redact_in_place(&mut copy, keys);
    truncate_for_log(&copy.to_string())
}

fn redact_in_place(value: &mut Value, keys: &[&str]) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if keys.contains(&key.as_str()) {
                    *child = Value::String(REDACTED.to_string());
                } else {
                    redact_in_place(child, keys);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                redact_in_place(item, keys);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "ä".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 400 bytes]"));
    }

    #[test]
    fn described_body_hides_content() {
        let body = r#"[{"id":1,"userId":7,"content":"{\"password\":\"s3cret\"}"}]"#;
        let logged = describe_body(body);
        assert!(!logged.contains("s3cret"));
        assert_eq!(logged, format!("<{} bytes>", body.len()));
    }

    #[test]
    fn nested_passwords_masked() {
        let body = json!({
            "email": "a@b.com",
            "encryptPassword": "p",
            "content": { "url": "https://x.com", "password": "s3cret" }
        });
        let logged = redact_json(&body, &["encryptPassword", "password"]);
        assert!(logged.contains("a@b.com"));
        assert!(logged.contains("https://x.com"));
        assert!(!logged.contains("s3cret"));
        assert!(!logged.contains("\"p\""));
    }
}
