//! Response envelope unwrapping.
//!
//! Moltbook responses come either bare (`[...]`, `{...}`) or wrapped
//! (`{"success": true, "posts": [...]}`, `{"agent": {...}}`). These helpers
//! find the payload and decode it.

use serde::de::DeserializeOwned;
use serde_json::Value;

use molt_types::error::SocialError;

/// Keys tried after the endpoint-specific ones.
const GENERIC_KEYS: &[&str] = &["data", "results"];

/// Decode a single object, looking inside `keys` first.
pub fn decode_item<T: DeserializeOwned>(value: Value, keys: &[&str]) -> Result<T, SocialError> {
    let inner = value.as_object().and_then(|map| {
        keys.iter()
            .chain(GENERIC_KEYS)
            .find_map(|key| map.get(*key).filter(|inner| inner.is_object()).cloned())
    });
    decode(inner.unwrap_or(value))
}

/// Decode a list, accepting a bare array or an array under one of `keys`.
pub fn decode_list<T: DeserializeOwned>(value: Value, keys: &[&str]) -> Result<Vec<T>, SocialError> {
    let payload = match value {
        array @ Value::Array(_) => array,
        Value::Object(mut map) => keys
            .iter()
            .chain(GENERIC_KEYS)
            .find_map(|key| map.remove(*key).filter(|inner| inner.is_array()))
            .ok_or_else(|| {
                SocialError::Deserialization(format!(
                    "expected a list under one of {:?}",
                    keys.iter().chain(GENERIC_KEYS).collect::<Vec<_>>()
                ))
            })?,
        other => {
            return Err(SocialError::Deserialization(format!(
                "expected a list, got {other}"
            )));
        }
    };
    decode(payload)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SocialError> {
    serde_json::from_value(value).map_err(|e| SocialError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use molt_types::social::{AgentProfile, Post};
    use serde_json::json;

    #[test]
    fn test_bare_list() {
        let posts: Vec<Post> = decode_list(json!([{"id": "1"}, {"id": "2"}]), &["posts"]).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_wrapped_list() {
        let posts: Vec<Post> = decode_list(
            json!({"success": true, "posts": [{"id": "1", "title": "hi"}]}),
            &["posts"],
        )
        .unwrap();
        assert_eq!(posts[0].title, "hi");
    }

    #[test]
    fn test_generic_results_key() {
        let posts: Vec<Post> =
            decode_list(json!({"results": [{"id": 9}]}), &["posts"]).unwrap();
        assert_eq!(posts[0].id, "9");
    }

    #[test]
    fn test_non_list_is_error() {
        let result: Result<Vec<Post>, _> = decode_list(json!({"error": "nope"}), &["posts"]);
        assert!(matches!(result, Err(SocialError::Deserialization(_))));
        let result: Result<Vec<Post>, _> = decode_list(json!("text"), &["posts"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrapped_and_bare_item() {
        let wrapped: AgentProfile =
            decode_item(json!({"success": true, "agent": {"name": "molty", "karma": 3}}), &["agent"])
                .unwrap();
        assert_eq!(wrapped.name, "molty");
        assert_eq!(wrapped.karma, 3);

        let bare: AgentProfile = decode_item(json!({"name": "molty"}), &["agent"]).unwrap();
        assert_eq!(bare.name, "molty");
    }
}
