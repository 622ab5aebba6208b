//! Moltbook entities: posts, comments, profiles and communities.
//!
//! The API is loose about shapes -- ids arrive as strings or numbers, and
//! `author`/`submolt` may be a bare name or an embedded object carrying a
//! `name` field. The deserializers here normalize both into plain strings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A post in a feed or search result. A fresh snapshot per fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "lenient_string", default)]
    pub id: String,
    #[serde(deserialize_with = "lenient_string", default)]
    pub title: String,
    #[serde(deserialize_with = "lenient_string", default)]
    pub content: String,
    #[serde(deserialize_with = "lenient_string", default)]
    pub author: String,
    #[serde(deserialize_with = "lenient_string", default)]
    pub submolt: String,
    #[serde(deserialize_with = "lenient_i64", default)]
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u64>,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "lenient_string", default)]
    pub id: String,
    #[serde(deserialize_with = "lenient_string", default)]
    pub content: String,
    #[serde(deserialize_with = "lenient_string", default)]
    pub author: String,
    #[serde(deserialize_with = "lenient_i64", default)]
    pub score: i64,
    #[serde(deserialize_with = "lenient_opt_string", default)]
    pub parent_id: Option<String>,
}

/// The authenticated agent's own profile (`GET /agents/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string", default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_i64", default)]
    pub karma: i64,
    #[serde(deserialize_with = "lenient_opt_string", default)]
    pub created_at: Option<String>,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

/// A topic community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submolt {
    #[serde(deserialize_with = "lenient_string", default)]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string", default)]
    pub description: Option<String>,
}

/// Result of registering a new agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub claim_url: Option<String>,
    #[serde(default)]
    pub verification_code: Option<String>,
}

/// Acknowledgement for votes and subscriptions. An empty body counts as success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(deserialize_with = "lenient_opt_string", default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl Default for Ack {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub submolt: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Feed ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSort {
    #[default]
    Hot,
    New,
    Top,
}

impl fmt::Display for FeedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSort::Hot => write!(f, "hot"),
            FeedSort::New => write!(f, "new"),
            FeedSort::Top => write!(f, "top"),
        }
    }
}

impl FromStr for FeedSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hot" => Ok(FeedSort::Hot),
            "new" => Ok(FeedSort::New),
            "top" => Ok(FeedSort::Top),
            other => Err(format!("invalid feed sort: '{other}' (expected hot, new or top)")),
        }
    }
}

/// Collapse a loosely-typed JSON value into a display string.
///
/// Objects resolve to their `name` (or `username`) field; `null` becomes
/// the empty string.
pub fn value_to_name(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("username"))
            .map(value_to_name)
            .unwrap_or_default(),
        Value::Array(_) => value.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_name(&value))
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let name = value_to_name(&value);
    Ok((!name.is_empty()).then_some(name))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_with_embedded_author_and_submolt() {
        let post: Post = serde_json::from_value(json!({
            "id": 42,
            "title": "Hello molts",
            "content": "first post",
            "author": {"name": "crab_bot", "karma": 10},
            "submolt": {"name": "general"},
            "score": 500,
            "comment_count": 3
        }))
        .unwrap();

        assert_eq!(post.id, "42");
        assert_eq!(post.author, "crab_bot");
        assert_eq!(post.submolt, "general");
        assert_eq!(post.score, 500);
        assert_eq!(post.comment_count, Some(3));
        assert!(post.url.is_none());
    }

    #[test]
    fn test_post_with_missing_fields_uses_defaults() {
        let post: Post = serde_json::from_value(json!({"id": "abc", "title": "t"})).unwrap();
        assert_eq!(post.content, "");
        assert_eq!(post.author, "");
        assert_eq!(post.score, 0);
    }

    #[test]
    fn test_post_null_content() {
        let post: Post =
            serde_json::from_value(json!({"id": "p1", "title": "link", "content": null}))
                .unwrap();
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_profile_defaults() {
        let profile: AgentProfile = serde_json::from_value(json!({})).unwrap();
        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.karma, 0);
        assert!(profile.description.is_none());
    }

    #[test]
    fn test_comment_parent_id_number() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "c1",
            "content": "nice",
            "author": "someone",
            "parent_id": 7
        }))
        .unwrap();
        assert_eq!(comment.parent_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_new_post_omits_empty_optionals() {
        let body = serde_json::to_value(NewPost {
            submolt: "general".into(),
            title: "t".into(),
            content: None,
            url: None,
        })
        .unwrap();
        assert!(body.get("content").is_none());
        assert!(body.get("url").is_none());
    }

    #[test]
    fn test_ack_from_empty_body() {
        let ack: Ack = serde_json::from_value(json!({})).unwrap();
        assert!(ack.success);
        let ack: Ack =
            serde_json::from_value(json!({"success": false, "message": "already voted"}))
                .unwrap();
        assert!(!ack.success);
        assert_eq!(ack.message.as_deref(), Some("already voted"));
    }

    #[test]
    fn test_feed_sort_parse() {
        assert_eq!("HOT".parse::<FeedSort>().unwrap(), FeedSort::Hot);
        assert_eq!(" new ".parse::<FeedSort>().unwrap(), FeedSort::New);
        assert_eq!(FeedSort::Top.to_string(), "top");
        assert!("rising".parse::<FeedSort>().is_err());
        assert_eq!(FeedSort::default(), FeedSort::Hot);
    }

    #[test]
    fn test_score_as_string_or_float() {
        let a: Post = serde_json::from_value(json!({"score": "12"})).unwrap();
        let b: Post = serde_json::from_value(json!({"score": 3.0})).unwrap();
        assert_eq!(a.score, 12);
        assert_eq!(b.score, 3);
    }
}
