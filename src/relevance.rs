//! Two-stage relevance gate: cheap keyword prefilter, then an LLM score.

use thiserror::Error;
use tracing::{debug, warn};

use crate::article::Article;
use crate::llm::Completion;
use crate::prompts::relevance_prompt;
use crate::TARGET_LLM_REQUEST;

/// Minimum model score an article needs to be retained.
pub const RELEVANCE_THRESHOLD: u8 = 6;

/// The model's reply must be a bare integer on the 0-10 scale; anything else
/// drops the article.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreParseError {
    #[error("model returned a non-numeric score: {0:?}")]
    NotANumber(String),
    #[error("score {0} is outside the 0-10 scale")]
    OutOfRange(u8),
}

pub fn parse_score(raw: &str) -> Result<u8, ScoreParseError> {
    let trimmed = raw.trim();
    let score = trimmed
        .parse::<u8>()
        .map_err(|_| ScoreParseError::NotANumber(trimmed.to_string()))?;
    if score > 10 {
        return Err(ScoreParseError::OutOfRange(score));
    }
    Ok(score)
}

/// True when any keyword appears case-insensitively in the article's title
/// or content.
pub fn matches_keywords(article: &Article, keywords: &[String]) -> bool {
    let haystack = format!("{} {}", article.title, article.content).to_lowercase();
    keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// Filters articles down to the relevant subset.
///
/// Articles failing the keyword gate never reach the model. For the rest,
/// one model call each: the article is retained iff the reply parses as an
/// integer of at least [`RELEVANCE_THRESHOLD`], and the score is recorded on
/// the article. Unparseable replies and failed calls drop the article.
pub async fn evaluate_relevance(
    articles: Vec<Article>,
    keywords: &[String],
    llm: &dyn Completion,
) -> Vec<Article> {
    let mut relevant = Vec::new();

    for mut article in articles {
        if !matches_keywords(&article, keywords) {
            debug!("No keyword match for {}, skipping model call", article.url);
            continue;
        }

        let prompt = relevance_prompt(&article.title, &article.content);
        let Some(reply) = llm.complete(&prompt).await else {
            warn!(target: TARGET_LLM_REQUEST, "No score returned for {}, dropping", article.url);
            continue;
        };

        match parse_score(&reply) {
            Ok(score) if score >= RELEVANCE_THRESHOLD => {
                debug!(target: TARGET_LLM_REQUEST, "{} scored {}", article.url, score);
                article.relevance_score = Some(score);
                relevant.push(article);
            }
            Ok(score) => {
                debug!(target: TARGET_LLM_REQUEST, "{} scored {} below threshold, dropping", article.url, score);
            }
            Err(err) => {
                debug!(target: TARGET_LLM_REQUEST, "Dropping {}: {}", article.url, err);
            }
        }
    }

    relevant
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedCompletion {
        replies: Mutex<VecDeque<&'static str>>,
    }

    impl ScriptedCompletion {
        fn new(replies: &[&'static str]) -> Self {
            ScriptedCompletion {
                replies: Mutex::new(replies.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl Completion for ScriptedCompletion {
        async fn complete(&self, _prompt: &str) -> Option<String> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .map(|reply| reply.to_string())
        }
    }

    struct PanicCompletion;

    #[async_trait]
    impl Completion for PanicCompletion {
        async fn complete(&self, _prompt: &str) -> Option<String> {
            panic!("model must not be invoked for keyword misses");
        }
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn parse_score_accepts_bare_integers() {
        assert_eq!(parse_score("8"), Ok(8));
        assert_eq!(parse_score(" 7\n"), Ok(7));
        assert_eq!(parse_score("0"), Ok(0));
    }

    #[test]
    fn parse_score_rejects_prose_and_out_of_range() {
        assert_eq!(
            parse_score("I'd say 8"),
            Err(ScoreParseError::NotANumber("I'd say 8".to_string()))
        );
        assert_eq!(parse_score("11"), Err(ScoreParseError::OutOfRange(11)));
        assert_eq!(parse_score("-1"), Err(ScoreParseError::NotANumber("-1".to_string())));
    }

    #[test]
    fn keyword_match_is_case_insensitive_over_title_and_content() {
        let article = Article::new("Figma tips", "https://example.com", "layout tricks");
        assert!(matches_keywords(&article, &keywords(&["FIGMA"])));
        assert!(matches_keywords(&article, &keywords(&["TRICK"])));
        assert!(!matches_keywords(&article, &keywords(&["rust"])));
    }

    #[tokio::test]
    async fn keyword_miss_never_invokes_model() {
        let articles = vec![Article::new("Gardening", "https://example.com/g", "soil")];
        let relevant = evaluate_relevance(articles, &keywords(&["rust"]), &PanicCompletion).await;
        assert!(relevant.is_empty());
    }

    #[tokio::test]
    async fn retains_articles_scoring_at_threshold_or_above() {
        let articles = vec![
            Article::new("Rust 1", "https://example.com/1", ""),
            Article::new("Rust 2", "https://example.com/2", ""),
            Article::new("Rust 3", "https://example.com/3", ""),
        ];
        let llm = ScriptedCompletion::new(&["8", "3", "6"]);
        let relevant = evaluate_relevance(articles, &keywords(&["rust"]), &llm).await;
        assert_eq!(relevant.len(), 2);
        assert_eq!(relevant[0].url, "https://example.com/1");
        assert_eq!(relevant[0].relevance_score, Some(8));
        assert_eq!(relevant[1].url, "https://example.com/3");
        assert_eq!(relevant[1].relevance_score, Some(6));
    }

    #[tokio::test]
    async fn unparseable_reply_drops_article_without_error() {
        let articles = vec![
            Article::new("Rust A", "https://example.com/a", ""),
            Article::new("Rust B", "https://example.com/b", ""),
        ];
        let llm = ScriptedCompletion::new(&["definitely a 9", "7"]);
        let relevant = evaluate_relevance(articles, &keywords(&["rust"]), &llm).await;
        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant[0].url, "https://example.com/b");
    }
}
