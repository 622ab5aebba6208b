//! Agent coordinator for the Moltbook agent.
//!
//! `Agent` owns the per-session state -- the API credential, the
//! conversation history and the last fetched profile -- and is the only
//! place that state changes. It passes the credential by reference to the
//! social client, builds chat requests from the history window and runs the
//! browse loop: fetch, prompt, parse, act, pace.
//!
//! All calls are awaited one after another; there is never more than one
//! request in flight.

use std::time::Duration;

use tracing::{debug, info, warn};

use molt_types::config::BrowseConfig;
use molt_types::decision::Decision;
use molt_types::error::SocialError;
use molt_types::llm::Message;
use molt_types::social::{
    Ack, AgentProfile, Comment, FeedSort, NewPost, Post, Registration, Submolt,
};

use crate::chat::aggregate::FragmentSink;
use crate::chat::client::ChatClient;
use crate::chat::provider::ChatProvider;
use crate::credential::Credential;
use crate::decision::parse_decision;
use crate::history::ConversationHistory;
use crate::social::SocialApi;

use super::browse::{ActionResult, BrowseError, BrowseObserver, BrowseReport, ItemOutcome};
use super::prompt::build_post_prompt;

/// Coordinates the social client and the chat client for one session.
pub struct Agent<S, P> {
    social: S,
    chat: ChatClient<P>,
    credential: Credential,
    history: ConversationHistory,
    browse: BrowseConfig,
    profile: Option<AgentProfile>,
}

impl<S: SocialApi, P: ChatProvider> Agent<S, P> {
    pub fn new(social: S, chat: ChatClient<P>, credential: Credential, browse: BrowseConfig) -> Self {
        let history = ConversationHistory::new(browse.history_window);
        Self {
            social,
            chat,
            credential,
            history,
            browse,
            profile: None,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn chat(&self) -> &ChatClient<P> {
        &self.chat
    }

    pub fn social(&self) -> &S {
        &self.social
    }

    /// The profile from the most recent successful `profile()` call.
    pub fn last_profile(&self) -> Option<&AgentProfile> {
        self.profile.as_ref()
    }

    /// Replace the API key. Returns whether a key is now set.
    pub fn set_api_key(&mut self, key: &str) -> bool {
        self.credential = Credential::new(key);
        self.credential.is_set()
    }

    /// Register a new agent and adopt the returned API key.
    pub async fn register(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<Registration, SocialError> {
        let registration = self.social.register(name, description).await?;
        if let Some(key) = registration.api_key.as_deref() {
            self.credential = Credential::new(key);
            info!(agent = name, "registered agent, API key stored for this session");
        } else {
            warn!(agent = name, "registration response carried no API key");
        }
        Ok(registration)
    }

    pub async fn profile(&mut self) -> Result<AgentProfile, SocialError> {
        let profile = self.social.profile(&self.credential).await?;
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    pub async fn feed(&self, sort: FeedSort, limit: u32) -> Result<Vec<Post>, SocialError> {
        self.social.feed(&self.credential, sort, limit).await
    }

    pub async fn post(&self, id: &str) -> Result<Post, SocialError> {
        self.social.post(&self.credential, id).await
    }

    /// Create a post. Blank `content` or `url` is left out of the request.
    pub async fn create_post(
        &self,
        submolt: &str,
        title: &str,
        content: Option<&str>,
        url: Option<&str>,
    ) -> Result<Post, SocialError> {
        let new_post = NewPost {
            submolt: submolt.to_string(),
            title: title.to_string(),
            content: non_blank(content),
            url: non_blank(url),
        };
        let post = self.social.create_post(&self.credential, &new_post).await?;
        info!(%submolt, %title, "post created");
        Ok(post)
    }

    pub async fn comment(
        &self,
        post_id: &str,
        content: &str,
        parent_id: Option<&str>,
    ) -> Result<Comment, SocialError> {
        self.social
            .comment(&self.credential, post_id, content, parent_id)
            .await
    }

    pub async fn upvote(&self, post_id: &str) -> Result<Ack, SocialError> {
        self.social.upvote(&self.credential, post_id).await
    }

    pub async fn downvote(&self, post_id: &str) -> Result<Ack, SocialError> {
        self.social.downvote(&self.credential, post_id).await
    }

    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Post>, SocialError> {
        self.social.search(&self.credential, query, limit).await
    }

    pub async fn submolts(&self) -> Result<Vec<Submolt>, SocialError> {
        self.social.submolts(&self.credential).await
    }

    pub async fn create_submolt(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Submolt, SocialError> {
        self.social
            .create_submolt(&self.credential, name, description)
            .await
    }

    pub async fn subscribe(&self, name: &str) -> Result<Ack, SocialError> {
        self.social.subscribe(&self.credential, name).await
    }

    /// Ask the model a question with the recent conversation as context.
    ///
    /// Sends `[system?] + window + user` and records the user message and
    /// the reply in history whatever the outcome. Returns empty text when
    /// the chat call fails.
    pub async fn ask<K>(&mut self, user_message: &str, system_prompt: Option<&str>, sink: &mut K) -> String
    where
        K: FragmentSink + ?Sized,
    {
        let window = self.history.window();
        let mut messages = Vec::with_capacity(window.len() + 2);
        if let Some(system) = system_prompt {
            messages.push(Message::system(system));
        }
        messages.extend_from_slice(window);
        messages.push(Message::user(user_message));

        let reply = self.chat.complete(messages, sink).await;
        self.history.record_exchange(user_message, &reply);
        reply
    }

    /// Run one autonomous browsing pass over the `hot` feed.
    ///
    /// Aborts before any per-post work if the profile or the feed cannot be
    /// fetched, or the feed is empty. Otherwise considers the first
    /// `max_items` posts in order, applying each decision as it is made.
    /// Nothing is rolled back if a later step fails.
    pub async fn browse<O>(&mut self, observer: &mut O) -> Result<BrowseReport, BrowseError>
    where
        O: BrowseObserver + ?Sized,
    {
        let profile = self.profile().await.map_err(BrowseError::Profile)?;
        observer.on_profile(&profile);

        let feed = self
            .feed(FeedSort::Hot, self.browse.feed_limit)
            .await
            .map_err(BrowseError::Feed)?;
        if feed.is_empty() {
            return Err(BrowseError::EmptyFeed);
        }
        observer.on_feed(feed.len());

        let total = feed.len().min(self.browse.max_items);
        let pace = Duration::from_secs(self.browse.pace_secs);
        info!(agent = %profile.name, feed = feed.len(), considering = total, "browsing feed");

        let mut items = Vec::with_capacity(total);
        for (index, post) in feed.iter().take(total).enumerate() {
            observer.on_item(index + 1, total, post);

            let prompt = build_post_prompt(post, self.browse.preview_chars);
            let reply = self.ask(&prompt, None, &mut *observer).await;
            let decision = parse_decision(&reply);
            debug!(post_id = %post.id, %decision, "decision parsed");

            let action = self.apply(&post.id, &decision).await;
            let outcome = ItemOutcome {
                post_id: post.id.clone(),
                title: post.title.clone(),
                decision,
                action,
            };
            observer.on_outcome(&outcome);
            items.push(outcome);

            if index + 1 < total && !pace.is_zero() {
                tokio::time::sleep(pace).await;
            }
        }

        Ok(BrowseReport {
            agent_name: profile.name,
            feed_size: feed.len(),
            items,
        })
    }

    /// Connection check followed by a browsing pass.
    pub async fn heartbeat<O>(&mut self, observer: &mut O) -> Result<BrowseReport, BrowseError>
    where
        O: BrowseObserver + ?Sized,
    {
        let profile = self.profile().await.map_err(BrowseError::Profile)?;
        info!(agent = %profile.name, "heartbeat connected");
        self.browse(observer).await
    }

    async fn apply(&self, post_id: &str, decision: &Decision) -> ActionResult {
        let result = match decision {
            Decision::Upvote => self.upvote(post_id).await.and_then(ack_result),
            Decision::Comment(text) => self.comment(post_id, text, None).await.map(|_| ()),
            Decision::Skip | Decision::Unrecognized => return ActionResult::NotAttempted,
        };

        match result {
            Ok(()) => ActionResult::Applied,
            Err(err) => {
                warn!(%post_id, %decision, error = %err, "action failed");
                ActionResult::Failed(err.to_string())
            }
        }
    }
}

fn ack_result(ack: Ack) -> Result<(), SocialError> {
    if ack.success {
        Ok(())
    } else {
        Err(SocialError::Rejected(
            ack.message.unwrap_or_else(|| "no reason given".to_string()),
        ))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
