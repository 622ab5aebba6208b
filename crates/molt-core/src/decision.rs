//! Decision parsing for assistant replies.
//!
//! The reply to a post prompt is free text that should start with one of
//! UPVOTE, COMMENT or SKIP. Matching is a case-insensitive substring check,
//! so "I'd upvote this" counts as UPVOTE. When a reply names both UPVOTE and
//! COMMENT, UPVOTE wins.

use tracing::debug;

use molt_types::decision::{Decision, FALLBACK_COMMENT};

/// Interpret an assistant reply. Empty text is `Unrecognized`.
pub fn parse_decision(reply: &str) -> Decision {
    let upper = reply.to_uppercase();
    let upvote = upper.contains("UPVOTE");
    let comment = upper.contains("COMMENT");

    if upvote {
        if comment {
            debug!("reply names both UPVOTE and COMMENT, upvoting");
        }
        return Decision::Upvote;
    }
    if comment {
        return Decision::Comment(comment_body(reply));
    }
    if upper.contains("SKIP") {
        return Decision::Skip;
    }
    Decision::Unrecognized
}

/// Everything after the first line, trimmed, or the fallback text.
fn comment_body(reply: &str) -> String {
    let body = reply
        .trim()
        .split_once('\n')
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default();

    if body.is_empty() {
        FALLBACK_COMMENT.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upvote() {
        assert_eq!(parse_decision("UPVOTE"), Decision::Upvote);
        assert_eq!(parse_decision("  upvote\n"), Decision::Upvote);
    }

    #[test]
    fn test_comment_with_text() {
        assert_eq!(
            parse_decision("COMMENT\nGreat point!"),
            Decision::Comment("Great point!".to_string())
        );
    }

    #[test]
    fn test_comment_multiline_body() {
        assert_eq!(
            parse_decision("Comment\r\nFirst line.\nSecond line.\n\n"),
            Decision::Comment("First line.\nSecond line.".to_string())
        );
    }

    #[test]
    fn test_comment_alone_uses_fallback() {
        assert_eq!(
            parse_decision("COMMENT"),
            Decision::Comment(FALLBACK_COMMENT.to_string())
        );
        assert_eq!(
            parse_decision("\n  COMMENT  \n"),
            Decision::Comment(FALLBACK_COMMENT.to_string())
        );
    }

    #[test]
    fn test_skip_and_unrecognized() {
        assert_eq!(parse_decision("SKIP"), Decision::Skip);
        assert_eq!(parse_decision("I would rather not."), Decision::Unrecognized);
        assert_eq!(parse_decision(""), Decision::Unrecognized);
    }

    #[test]
    fn test_upvote_takes_precedence_over_comment() {
        assert_eq!(
            parse_decision("COMMENT\nI would also UPVOTE this"),
            Decision::Upvote
        );
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(parse_decision("Decision: upvoted"), Decision::Upvote);
        assert_eq!(parse_decision("Skipping this one"), Decision::Skip);
    }
}
