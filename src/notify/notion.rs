use serde_json::{json, Value};
use tracing::{error, info};

use crate::article::Article;
use crate::config::Config;
use crate::TARGET_WEB_REQUEST;

const NOTION_VERSION: &str = "2022-06-28";

/// Page-create payload for one article: title, URL, and combined popularity
/// mapped into the fixed database schema.
pub fn page_payload(article: &Article, database_id: &str) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Title": { "title": [{ "text": { "content": article.title } }] },
            "URL": { "url": article.url },
            "Popularity": { "number": article.popularity() }
        }
    })
}

/// Creates one Notion page per article. No batching, no idempotency key;
/// re-running the pipeline duplicates records. Failures are logged per
/// article, never raised.
pub async fn save_articles(articles: &[Article], config: &Config, http: &reqwest::Client) {
    for article in articles {
        let payload = page_payload(article, &config.notion_database_id);
        let res = http
            .post(format!("{}/v1/pages", config.notion_api_url))
            .bearer_auth(&config.notion_api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&payload)
            .send()
            .await;

        match res {
            Ok(response) => {
                if response.status().is_success() {
                    info!(target: TARGET_WEB_REQUEST, " ** Saved {} to Notion", article.url);
                } else {
                    let status = response.status();
                    let error_text = response.text().await.unwrap_or_default();
                    error!(target: TARGET_WEB_REQUEST, " !! Error saving {} to Notion: {} {}", article.url, status, error_text);
                }
            }
            Err(err) => {
                error!(target: TARGET_WEB_REQUEST, " !! Error saving {} to Notion: {:?}", article.url, err);
            }
        }
    }
}
