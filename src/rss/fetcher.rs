//! Feed retrieval over HTTP.

use anyhow::{anyhow, bail, Result};
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};
use url::Url;

use super::parser::parse_articles;
use crate::article::Article;
use crate::TARGET_WEB_REQUEST;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches every configured feed once, in order, and collects the normalized
/// articles. A feed that is unreachable, malformed, or returns a non-success
/// status contributes nothing and does not affect the other feeds.
pub async fn fetch_articles(http: &reqwest::Client, sources: &[String]) -> Vec<Article> {
    let mut articles = Vec::new();

    for source in sources {
        if source.trim().is_empty() {
            debug!(target: TARGET_WEB_REQUEST, "Skipping empty feed URL");
            continue;
        }

        if !is_valid_url(source) {
            debug!(target: TARGET_WEB_REQUEST, "Skipping invalid feed URL: {}", source);
            continue;
        }

        match fetch_source(http, source).await {
            Ok(batch) => {
                info!(target: TARGET_WEB_REQUEST, "Fetched {} entries from {}", batch.len(), source);
                articles.extend(batch);
            }
            Err(err) => {
                warn!(target: TARGET_WEB_REQUEST, "Failed to fetch feed {}: {}", source, err);
            }
        }
    }

    articles
}

async fn fetch_source(http: &reqwest::Client, source: &str) -> Result<Vec<Article>> {
    debug!(target: TARGET_WEB_REQUEST, "Loading feed from {}", source);

    let response = timeout(REQUEST_TIMEOUT, http.get(source).send())
        .await
        .map_err(|_| anyhow!("request timed out"))??;

    if !response.status().is_success() {
        bail!("non-success status {}", response.status());
    }

    let body = response.text().await?;
    parse_articles(&body)
}

fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| url.scheme() == "http" || url.scheme() == "https")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_http_urls_only() {
        assert!(is_valid_url("https://example.com/feed"));
        assert!(is_valid_url("http://example.com/rss"));
        assert!(!is_valid_url("ftp://example.com/feed"));
        assert!(!is_valid_url("not a url"));
    }
}
