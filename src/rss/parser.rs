//! Feed parsing logic for RSS and Atom content.

use anyhow::Result;
use feed_rs::parser;
use std::io::Cursor;
use tracing::warn;

use crate::article::Article;
use crate::TARGET_WEB_REQUEST;

/// Only the newest entries of each feed are considered, in source order.
pub const MAX_ENTRIES_PER_FEED: usize = 5;

/// Parses feed content into normalized articles.
///
/// Entries without a link are skipped; a missing summary becomes empty
/// content. At most [`MAX_ENTRIES_PER_FEED`] articles are returned.
pub fn parse_articles(body: &str) -> Result<Vec<Article>> {
    let feed = parser::parse(Cursor::new(body))?;

    let mut articles = Vec::new();
    for entry in feed.entries {
        if articles.len() >= MAX_ENTRIES_PER_FEED {
            break;
        }

        let Some(url) = entry.links.first().map(|link| link.href.clone()) else {
            warn!(target: TARGET_WEB_REQUEST, "Feed entry missing link, skipping");
            continue;
        };

        let title = entry.title.map(|t| t.content).unwrap_or_default();
        let content = entry.summary.map(|s| s.content).unwrap_or_default();

        articles.push(Article::new(title, url, content));
    }

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rss_feed(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Test Feed</title>{}</channel></rss>"#,
            items
        )
    }

    #[test]
    fn parses_title_link_and_summary() {
        let body = rss_feed(
            "<item><title>Rust 2.0</title><link>https://example.com/rust</link>\
             <description>All about rust.</description></item>",
        );
        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Rust 2.0");
        assert_eq!(articles[0].url, "https://example.com/rust");
        assert_eq!(articles[0].content, "All about rust.");
        assert!(articles[0].relevance_score.is_none());
        assert!(articles[0].social.is_none());
    }

    #[test]
    fn missing_summary_becomes_empty_content() {
        let body = rss_feed("<item><title>Bare</title><link>https://example.com/bare</link></item>");
        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].content, "");
    }

    #[test]
    fn caps_entries_per_feed() {
        let items: String = (0..8)
            .map(|i| {
                format!(
                    "<item><title>Item {i}</title><link>https://example.com/{i}</link></item>"
                )
            })
            .collect();
        let articles = parse_articles(&rss_feed(&items)).unwrap();
        assert_eq!(articles.len(), MAX_ENTRIES_PER_FEED);
        assert_eq!(articles[0].title, "Item 0");
        assert_eq!(articles[4].title, "Item 4");
    }

    #[test]
    fn rejects_non_feed_content() {
        assert!(parse_articles("<html><body>not a feed</body></html>").is_err());
    }
}
