//! MoltbookClient -- concrete [`SocialApi`] over the Moltbook REST API.
//!
//! Every call is one HTTP round trip with a fixed timeout and no retry.
//! Authenticated calls check the credential before building a request, so a
//! missing key never reaches the network. The key is only exposed while
//! setting the `Authorization` header.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::{Value, json};

use molt_core::credential::Credential;
use molt_core::social::SocialApi;
use molt_types::config::SocialConfig;
use molt_types::error::SocialError;
use molt_types::social::{
    Ack, AgentProfile, Comment, FeedSort, NewPost, Post, Registration, Submolt,
};

use super::envelope::{decode_item, decode_list};

/// Moltbook REST client.
pub struct MoltbookClient {
    client: reqwest::Client,
    base_url: String,
    requests_sent: AtomicU64,
}

// MoltbookClient intentionally does NOT derive Debug, matching the chat
// provider; credentials pass through it on every call.

/// How a request authenticates.
enum Auth<'a> {
    Anonymous,
    Bearer(&'a Credential),
}

impl MoltbookClient {
    /// Create a client from the `[social]` config section.
    pub fn new(config: &SocialConfig) -> Result<Self, SocialError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SocialError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            requests_sent: AtomicU64::new(0),
        })
    }

    /// Number of HTTP requests this client has put on the wire.
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent.load(Ordering::Relaxed)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request and return the JSON body (`{}` when empty).
    async fn send(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, SocialError> {
        let key = match auth {
            Auth::Bearer(credential) => Some(credential.require()?),
            Auth::Anonymous => None,
        };

        let mut builder = self.client.request(method.clone(), self.url(path));
        if let Some(key) = key {
            builder = builder.bearer_auth(key.expose_secret());
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let seq = self.requests_sent.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(seq, %method, path, "moltbook request");

        let response = builder
            .send()
            .await
            .map_err(|e| SocialError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SocialError::Transport(format!("response body read: {e}")))?;

        if !status.is_success() {
            tracing::warn!(seq, status = %status, body = %text, path, "moltbook API error response");
            return Err(SocialError::from_status(status.as_u16(), text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_str(&text)
            .map_err(|e| SocialError::Deserialization(format!("failed to parse response: {e}")))
    }

    async fn get(
        &self,
        path: &str,
        credential: &Credential,
        query: &[(&str, String)],
    ) -> Result<Value, SocialError> {
        self.send(Method::GET, path, Auth::Bearer(credential), query, None)
            .await
    }

    async fn post_json(
        &self,
        path: &str,
        credential: &Credential,
        body: Option<Value>,
    ) -> Result<Value, SocialError> {
        self.send(Method::POST, path, Auth::Bearer(credential), &[], body)
            .await
    }
}

impl SocialApi for MoltbookClient {
    async fn register(&self, name: &str, description: &str) -> Result<Registration, SocialError> {
        let body = json!({ "name": name, "description": description });
        let value = self
            .send(Method::POST, "/agents/register", Auth::Anonymous, &[], Some(body))
            .await?;
        decode_item(value, &["agent"])
    }

    async fn profile(&self, credential: &Credential) -> Result<AgentProfile, SocialError> {
        let value = self.get("/agents/me", credential, &[]).await?;
        decode_item(value, &["agent"])
    }

    async fn feed(
        &self,
        credential: &Credential,
        sort: FeedSort,
        limit: u32,
    ) -> Result<Vec<Post>, SocialError> {
        let query = [("sort", sort.to_string()), ("limit", limit.to_string())];
        let value = self.get("/posts", credential, &query).await?;
        decode_list(value, &["posts"])
    }

    async fn post(&self, credential: &Credential, id: &str) -> Result<Post, SocialError> {
        let value = self.get(&format!("/posts/{id}"), credential, &[]).await?;
        decode_item(value, &["post"])
    }

    async fn create_post(&self, credential: &Credential, post: &NewPost) -> Result<Post, SocialError> {
        let body = serde_json::to_value(post)
            .map_err(|e| SocialError::Deserialization(e.to_string()))?;
        let value = self.post_json("/posts", credential, Some(body)).await?;
        decode_item(value, &["post"])
    }

    async fn comment(
        &self,
        credential: &Credential,
        post_id: &str,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<Comment, SocialError> {
        let mut body = json!({ "content": content });
        if let Some(parent_id) = parent_id {
            body["parent_id"] = json!(parent_id);
        }
        let value = self
            .post_json(&format!("/posts/{post_id}/comments"), credential, Some(body))
            .await?;
        decode_item(value, &["comment"])
    }

    async fn upvote(&self, credential: &Credential, post_id: &str) -> Result<Ack, SocialError> {
        let value = self
            .post_json(&format!("/posts/{post_id}/upvote"), credential, None)
            .await?;
        decode_item(value, &[])
    }

    async fn downvote(&self, credential: &Credential, post_id: &str) -> Result<Ack, SocialError> {
        let value = self
            .post_json(&format!("/posts/{post_id}/downvote"), credential, None)
            .await?;
        decode_item(value, &[])
    }

    async fn search(
        &self,
        credential: &Credential,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Post>, SocialError> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        let value = self.get("/search", credential, &params).await?;
        decode_list(value, &["posts"])
    }

    async fn submolts(&self, credential: &Credential) -> Result<Vec<Submolt>, SocialError> {
        let value = self.get("/submolts", credential, &[]).await?;
        decode_list(value, &["submolts"])
    }

    async fn create_submolt(
        &self,
        credential: &Credential,
        name: &str,
        description: &str,
    ) -> Result<Submolt, SocialError> {
        let body = json!({ "name": name, "description": description });
        let value = self.post_json("/submolts", credential, Some(body)).await?;
        decode_item(value, &["submolt"])
    }

    async fn subscribe(&self, credential: &Credential, name: &str) -> Result<Ack, SocialError> {
        let value = self
            .post_json(&format!("/submolts/{name}/subscribe"), credential, None)
            .await?;
        decode_item(value, &[])
    }
}
