//! Secret payload decoding
//!
//! A secret's `content` is either a JSON object (`{"url", "userName", "password", ...}`)
//! or an opaque string such as ciphertext. [`decode`] never fails: anything that is not
//! a JSON object is kept verbatim as [`DecodedContent::Raw`].

use serde_json::{Map, Value};

use crate::types::EditDraft;

const URL_KEY: &str = "url";
const USER_NAME_KEY: &str = "userName";
const PASSWORD_KEY: &str = "password";
/// Key of the fallback object produced by [`DecodedContent::to_json`]
pub const RAW_KEY: &str = "data";

/// Decoded view of a secret payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedContent {
    /// Payload was a JSON object
    Structured {
        url: Option<String>,
        user_name: Option<String>,
        password: Option<String>,
        /// All other keys, plus known keys whose value is not a string
        extra: Map<String, Value>,
    },
    /// Payload kept as-is
    Raw { text: String },
}

/// Decode a raw payload. Infallible.
pub fn decode(raw: &str) -> DecodedContent {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(mut extra)) => DecodedContent::Structured {
            url: take_string(&mut extra, URL_KEY),
            user_name: take_string(&mut extra, USER_NAME_KEY),
            password: take_string(&mut extra, PASSWORD_KEY),
            extra,
        },
        Ok(_) | Err(_) => DecodedContent::Raw {
            text: raw.to_string(),
        },
    }
}

/// Remove `key` from `map` only when it holds a string
fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(map.get(key), Some(Value::String(_))) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

impl DecodedContent {
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Structured { url, .. } => url.as_deref(),
            Self::Raw { .. } => None,
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        match self {
            Self::Structured { user_name, .. } => user_name.as_deref(),
            Self::Raw { .. } => None,
        }
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Structured { password, .. } => password.as_deref(),
            Self::Raw { .. } => None,
        }
    }

    /// Edit form seeded from the decoded fields; missing fields start empty
    pub fn draft(&self) -> EditDraft {
        EditDraft {
            url: self.url().unwrap_or_default().to_string(),
            user_name: self.user_name().unwrap_or_default().to_string(),
            password: self.password().unwrap_or_default().to_string(),
        }
    }

    /// JSON form: the parsed object, or `{"data": text}` for raw payloads
    pub fn to_json(&self) -> Value {
        match self {
            Self::Structured {
                url,
                user_name,
                password,
                extra,
            } => {
                let mut map = extra.clone();
                for (key, value) in [
                    (URL_KEY, url),
                    (USER_NAME_KEY, user_name),
                    (PASSWORD_KEY, password),
                ] {
                    if let Some(v) = value {
                        map.insert(key.to_string(), Value::String(v.clone()));
                    }
                }
                Value::Object(map)
            }
            Self::Raw { text } => {
                let mut map = Map::new();
                map.insert(RAW_KEY.to_string(), Value::String(text.clone()));
                Value::Object(map)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_decodes_to_structured() {
        let decoded = decode(r#"{"url":"https://x.com","userName":"bob"}"#);
        assert_eq!(decoded.url(), Some("https://x.com"));
        assert_eq!(decoded.user_name(), Some("bob"));
        assert_eq!(decoded.password(), None);
        assert!(!decoded.is_raw());
    }

    #[test]
    fn object_round_trips_unchanged() {
        let inputs = [
            r#"{}"#,
            r#"{"url":"https://x.com","userName":"bob","password":"pw"}"#,
            r#"{"url":"u","note":"keep me","tags":["a","b"],"n":3}"#,
            r#"{"password":42,"userName":null}"#,
        ];
        for input in inputs {
            let parsed: Value = serde_json::from_str(input).unwrap_or_default();
            assert_eq!(decode(input).to_json(), parsed, "input: {input}");
        }
    }

    #[test]
    fn non_string_known_key_stays_in_extra() {
        let DecodedContent::Structured { password, extra, .. } = decode(r#"{"password":42}"#)
        else {
            panic!("expected structured content");
        };
        assert_eq!(password, None);
        assert_eq!(extra.get("password"), Some(&json!(42)));
    }

    #[test]
    fn non_json_falls_back_to_raw() {
        for input in ["not json at all", "", "{broken", "U2FsdGVkX1+abc=="] {
            let decoded = decode(input);
            assert_eq!(
                decoded,
                DecodedContent::Raw {
                    text: input.to_string()
                }
            );
            assert_eq!(decoded.to_json(), json!({ "data": input }));
        }
    }

    #[test]
    fn json_scalars_and_arrays_are_raw() {
        for input in ["42", r#""quoted""#, "[1,2]", "null", "true"] {
            assert!(decode(input).is_raw(), "input: {input}");
        }
    }

    #[test]
    fn draft_from_raw_is_empty() {
        assert_eq!(decode("opaque").draft(), EditDraft::default());
    }

    #[test]
    fn draft_from_partial_object() {
        let draft = decode(r#"{"url":"https://x.com","userName":"bob"}"#).draft();
        assert_eq!(draft.url, "https://x.com");
        assert_eq!(draft.user_name, "bob");
        assert_eq!(draft.password, "");
    }
}
