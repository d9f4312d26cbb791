use chrono::Local;
use serde_json::json;
use tracing::{error, info};

use crate::article::Article;
use crate::TARGET_WEB_REQUEST;

/// One markdown bullet per article under a dated header.
pub fn webhook_message(articles: &[Article]) -> String {
    let mut message = format!(
        "**Tech & Design Watch - {}**\n\n",
        Local::now().format("%Y-%m-%d")
    );
    for article in articles {
        message.push_str(&format!("- **[{}]({})**\n", article.title, article.url));
    }
    message
}

/// Posts the article list to the Discord webhook as `{"content": ...}`.
///
/// Skipped entirely when no webhook URL is configured; a non-success
/// response is logged, never raised.
pub async fn send_to_discord(
    articles: &[Article],
    webhook_url: Option<&str>,
    http: &reqwest::Client,
) {
    let Some(webhook_url) = webhook_url else {
        info!("No Discord webhook configured, skipping notification");
        return;
    };

    let payload = json!({ "content": webhook_message(articles) });

    info!(target: TARGET_WEB_REQUEST, "Sending Discord notification");
    let res = http.post(webhook_url).json(&payload).send().await;

    match res {
        Ok(response) => {
            if response.status().is_success() {
                info!(" ** Discord notification sent successfully");
            } else {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                error!(" !! Error sending Discord notification: {} {}", status, error_text);
            }
        }
        Err(err) => {
            error!(" !! Error sending Discord notification: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_has_one_bullet_per_article() {
        let articles = vec![
            Article::new("One", "https://example.com/1", ""),
            Article::new("Two", "https://example.com/2", ""),
        ];
        let message = webhook_message(&articles);
        assert!(message.contains("- **[One](https://example.com/1)**\n"));
        assert!(message.contains("- **[Two](https://example.com/2)**\n"));
        assert_eq!(message.matches("- **[").count(), 2);
    }

    #[test]
    fn empty_set_keeps_only_the_header() {
        let message = webhook_message(&[]);
        assert!(message.starts_with("**Tech & Design Watch - "));
        assert!(!message.contains("- **["));
    }
}
