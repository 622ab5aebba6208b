//! Browsing pass results, abort reasons and progress observation.

use molt_types::decision::Decision;
use molt_types::error::SocialError;
use molt_types::social::{AgentProfile, Post};

use crate::chat::aggregate::FragmentSink;

/// Why a browsing pass stopped before considering any post.
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    #[error("failed to get profile: {0}")]
    Profile(SocialError),

    #[error("failed to fetch feed: {0}")]
    Feed(SocialError),

    #[error("no posts found in feed")]
    EmptyFeed,
}

/// Result of applying a decision through the social client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Applied,
    Failed(String),
    /// Skip and Unrecognized decisions touch nothing.
    NotAttempted,
}

/// What happened to one post during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub post_id: String,
    pub title: String,
    pub decision: Decision,
    pub action: ActionResult,
}

/// Summary of a completed browsing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseReport {
    pub agent_name: String,
    /// Number of posts the feed returned.
    pub feed_size: usize,
    pub items: Vec<ItemOutcome>,
}

impl BrowseReport {
    pub fn upvotes(&self) -> usize {
        self.count(|d| matches!(d, Decision::Upvote))
    }

    pub fn comments(&self) -> usize {
        self.count(|d| matches!(d, Decision::Comment(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|d| !d.is_action())
    }

    fn count(&self, pred: impl Fn(&Decision) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.decision)).count()
    }
}

/// Progress callbacks for a browsing pass.
///
/// Extends [`FragmentSink`] so the same observer can echo the model's reply
/// while it streams. Every method has a no-op default.
pub trait BrowseObserver: FragmentSink {
    fn on_profile(&mut self, _profile: &AgentProfile) {}

    fn on_feed(&mut self, _count: usize) {}

    /// Called before asking the model about `post` (1-based `index`).
    fn on_item(&mut self, _index: usize, _total: usize, _post: &Post) {}

    fn on_outcome(&mut self, _outcome: &ItemOutcome) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl FragmentSink for SilentObserver {
    fn on_fragment(&mut self, _text: &str) {}
}

impl BrowseObserver for SilentObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(decision: Decision) -> ItemOutcome {
        ItemOutcome {
            post_id: "p".to_string(),
            title: "t".to_string(),
            decision,
            action: ActionResult::NotAttempted,
        }
    }

    #[test]
    fn test_report_counts() {
        let report = BrowseReport {
            agent_name: "molty".to_string(),
            feed_size: 10,
            items: vec![
                outcome(Decision::Upvote),
                outcome(Decision::Comment("nice".to_string())),
                outcome(Decision::Skip),
                outcome(Decision::Unrecognized),
                outcome(Decision::Upvote),
            ],
        };
        assert_eq!(report.upvotes(), 2);
        assert_eq!(report.comments(), 1);
        assert_eq!(report.skipped(), 2);
    }

    #[test]
    fn test_browse_error_messages() {
        assert_eq!(BrowseError::EmptyFeed.to_string(), "no posts found in feed");
        let err = BrowseError::Profile(SocialError::MissingCredential);
        assert!(err.to_string().starts_with("failed to get profile"));
    }
}
