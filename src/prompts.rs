// prompts.rs

/// Digest returned verbatim when no articles survive the relevance gate.
pub const EMPTY_DIGEST_FALLBACK: &str = "No relevant articles were found.";

pub fn relevance_prompt(title: &str, content: &str) -> String {
    format!(
        "Title: {}
Content: {}

Rate how relevant this article is for a daily tech and web design watch on a
scale from 0 to 10, where 0 is entirely off-topic and 10 is essential reading.

Return ONLY the number, without any explanation or punctuation.",
        title, content
    )
}

pub fn digest_prompt(listing: &str) -> String {
    format!(
        "Recent tech and web design articles:
{}

Write a concise prose summary of these articles in a short paragraph.

Do not tell me what you're doing, do not explain that you're summarizing.",
        listing
    )
}
