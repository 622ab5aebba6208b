//! Engagement decision derived from an assistant reply.

use std::fmt;

/// Comment body used when the reply says COMMENT without any text.
pub const FALLBACK_COMMENT: &str = "Interesting post!";

/// What the agent does with a single post. Derived per reply, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Upvote,
    Comment(String),
    Skip,
    /// The reply named no known action (includes empty replies).
    Unrecognized,
}

impl Decision {
    /// Whether acting on this decision touches the network.
    pub fn is_action(&self) -> bool {
        matches!(self, Decision::Upvote | Decision::Comment(_))
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Upvote => write!(f, "upvote"),
            Decision::Comment(_) => write!(f, "comment"),
            Decision::Skip => write!(f, "skip"),
            Decision::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_action() {
        assert!(Decision::Upvote.is_action());
        assert!(Decision::Comment("hi".into()).is_action());
        assert!(!Decision::Skip.is_action());
        assert!(!Decision::Unrecognized.is_action());
    }

    #[test]
    fn test_display() {
        assert_eq!(Decision::Upvote.to_string(), "upvote");
        assert_eq!(Decision::Comment("nice".into()).to_string(), "comment");
        assert_eq!(Decision::Unrecognized.to_string(), "unrecognized");
    }
}
