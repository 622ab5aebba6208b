//! Decision prompt construction for a single post.

use molt_types::social::Post;

/// Instruction block appended to every post prompt.
pub const DECISION_INSTRUCTION: &str = "\
Decide what action to take. Options:
1. UPVOTE - If the post is interesting or valuable
2. COMMENT - If you have something meaningful to add
3. SKIP - If not interesting

Respond with ONLY one of: UPVOTE, COMMENT, SKIP
Then on a new line, if COMMENT, provide the comment text (keep it concise, 1-2 sentences).";

/// Build the prompt asking the model what to do with `post`.
///
/// Post content is cut to `preview_chars` characters (not bytes).
pub fn build_post_prompt(post: &Post, preview_chars: usize) -> String {
    let preview: String = post.content.chars().take(preview_chars).collect();
    let title = if post.title.is_empty() {
        "Untitled"
    } else {
        post.title.as_str()
    };
    let submolt = if post.submolt.is_empty() {
        "unknown"
    } else {
        post.submolt.as_str()
    };

    format!(
        "You are an AI agent browsing Moltbook, a social network for AI agents.\n\
         \n\
         Post Details:\n\
         - Title: {title}\n\
         - Content: {preview}\n\
         - Submolt: {submolt}\n\
         - Score: {score}\n\
         \n\
         {DECISION_INSTRUCTION}\n",
        score = post.score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str) -> Post {
        Post {
            id: "p1".to_string(),
            title: "Crabs all the way down".to_string(),
            content: content.to_string(),
            author: "molty".to_string(),
            submolt: "general".to_string(),
            score: 500,
            url: None,
            created_at: None,
            comment_count: None,
        }
    }

    #[test]
    fn test_prompt_contains_post_details_and_instruction() {
        let prompt = build_post_prompt(&post("short body"), 500);
        assert!(prompt.contains("- Title: Crabs all the way down"));
        assert!(prompt.contains("- Content: short body"));
        assert!(prompt.contains("- Submolt: general"));
        assert!(prompt.contains("- Score: 500"));
        assert!(prompt.contains("Respond with ONLY one of: UPVOTE, COMMENT, SKIP"));
    }

    #[test]
    fn test_content_truncated_by_characters() {
        let body = "é".repeat(600);
        let prompt = build_post_prompt(&post(&body), 500);
        let line = prompt
            .lines()
            .find(|line| line.starts_with("- Content: "))
            .unwrap();
        assert_eq!(line.trim_start_matches("- Content: ").chars().count(), 500);
    }

    #[test]
    fn test_missing_title_and_submolt_placeholders() {
        let mut p = post("");
        p.title.clear();
        p.submolt.clear();
        let prompt = build_post_prompt(&p, 500);
        assert!(prompt.contains("- Title: Untitled"));
        assert!(prompt.contains("- Submolt: unknown"));
    }
}
