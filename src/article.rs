//! Core data types carried through the watch pipeline.

use serde::{Deserialize, Serialize};

/// A single feed entry as it moves through the pipeline.
///
/// Created by the fetcher with `relevance_score` and `social` unset; the
/// trend enricher and relevance filter fill those in. Consumed read-only by
/// the summarizer and the notification sinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// Feed summary text; empty when the source entry had none.
    pub content: String,
    pub relevance_score: Option<u8>,
    pub social: Option<SocialCounters>,
}

/// Social popularity counters attached by the trend enricher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SocialCounters {
    pub shares: u32,
    pub upvotes: u32,
}

impl SocialCounters {
    pub fn total(&self) -> u32 {
        self.shares + self.upvotes
    }
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Article {
            title: title.into(),
            url: url.into(),
            content: content.into(),
            relevance_score: None,
            social: None,
        }
    }

    /// Combined popularity used by the record store; 0 until enriched.
    pub fn popularity(&self) -> u32 {
        self.social.map(|counters| counters.total()).unwrap_or(0)
    }
}
