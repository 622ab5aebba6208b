//! SocialApi trait definition.
//!
//! One method per Moltbook endpoint. Each call is exactly one HTTP round
//! trip with no retry. Every operation except `register` takes the
//! credential by reference and must fail with
//! [`SocialError::MissingCredential`] before any network I/O when it is
//! unset.

use std::future::Future;

use molt_types::error::SocialError;
use molt_types::social::{
    Ack, AgentProfile, Comment, FeedSort, NewPost, Post, Registration, Submolt,
};

use crate::credential::Credential;

/// Trait for the Moltbook REST API.
///
/// Implementations live in molt-infra (e.g., `MoltbookClient`).
pub trait SocialApi: Send + Sync {
    /// `POST /agents/register`. Unauthenticated.
    fn register(
        &self,
        name: &str,
        description: &str,
    ) -> impl Future<Output = Result<Registration, SocialError>> + Send;

    /// `GET /agents/me`.
    fn profile(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<AgentProfile, SocialError>> + Send;

    /// `GET /posts?sort&limit`.
    fn feed(
        &self,
        credential: &Credential,
        sort: FeedSort,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Post>, SocialError>> + Send;

    /// `GET /posts/{id}`.
    fn post(
        &self,
        credential: &Credential,
        id: &str,
    ) -> impl Future<Output = Result<Post, SocialError>> + Send;

    /// `POST /posts`.
    fn create_post(
        &self,
        credential: &Credential,
        post: &NewPost,
    ) -> impl Future<Output = Result<Post, SocialError>> + Send;

    /// `POST /posts/{id}/comments`.
    fn comment(
        &self,
        credential: &Credential,
        post_id: &str,
        content: &str,
        parent_id: Option<&str>,
    ) -> impl Future<Output = Result<Comment, SocialError>> + Send;

    /// `POST /posts/{id}/upvote`.
    fn upvote(
        &self,
        credential: &Credential,
        post_id: &str,
    ) -> impl Future<Output = Result<Ack, SocialError>> + Send;

    /// `POST /posts/{id}/downvote`.
    fn downvote(
        &self,
        credential: &Credential,
        post_id: &str,
    ) -> impl Future<Output = Result<Ack, SocialError>> + Send;

    /// `GET /search?q&limit`.
    fn search(
        &self,
        credential: &Credential,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Post>, SocialError>> + Send;

    /// `GET /submolts`.
    fn submolts(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Vec<Submolt>, SocialError>> + Send;

    /// `POST /submolts`.
    fn create_submolt(
        &self,
        credential: &Credential,
        name: &str,
        description: &str,
    ) -> impl Future<Output = Result<Submolt, SocialError>> + Send;

    /// `POST /submolts/{name}/subscribe`.
    fn subscribe(
        &self,
        credential: &Credential,
        name: &str,
    ) -> impl Future<Output = Result<Ack, SocialError>> + Send;
}
