//! Notification sinks for the retained article set.
//!
//! Three independent, order-insensitive operations: an HTML email, a Discord
//! webhook post, and one Notion page per article. Every sink failure is
//! logged and swallowed; none aborts the run.

pub mod discord;
pub mod email;
pub mod notion;

use crate::article::Article;
use crate::config::Config;

pub async fn notify_all(articles: &[Article], config: &Config, http: &reqwest::Client) {
    email::send_digest_email(articles, config).await;
    discord::send_to_discord(articles, config.discord_webhook_url.as_deref(), http).await;
    notion::save_articles(articles, config, http).await;
}
