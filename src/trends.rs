//! Social trend enrichment.
//!
//! Attaches share and upvote counters to each article. The counters are
//! fixed placeholders; no live lookup is performed.
//! TODO: wire up live Twitter share and Reddit upvote lookups.

use crate::article::{Article, SocialCounters};

pub const PLACEHOLDER_SHARES: u32 = 10;
pub const PLACEHOLDER_UPVOTES: u32 = 5;

fn twitter_shares(_url: &str) -> u32 {
    PLACEHOLDER_SHARES
}

fn reddit_upvotes(_url: &str) -> u32 {
    PLACEHOLDER_UPVOTES
}

pub fn enrich_articles(articles: &mut [Article]) {
    for article in articles {
        article.social = Some(SocialCounters {
            shares: twitter_shares(&article.url),
            upvotes: reddit_upvotes(&article.url),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_placeholder_counters() {
        let mut articles = vec![Article::new("A", "https://example.com/a", "")];
        enrich_articles(&mut articles);
        let social = articles[0].social.expect("counters attached");
        assert_eq!(social.shares, PLACEHOLDER_SHARES);
        assert_eq!(social.upvotes, PLACEHOLDER_UPVOTES);
        assert_eq!(articles[0].popularity(), 15);
    }
}
