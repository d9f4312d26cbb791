use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use crate::article::Article;
use crate::config::Config;

/// HTML body with one bullet per article; an empty set yields an empty
/// `<ul></ul>` list.
pub fn digest_html(articles: &[Article]) -> String {
    let items: String = articles
        .iter()
        .map(|article| format!(r#"<li><a href="{}">{}</a></li>"#, article.url, article.title))
        .collect();

    format!(
        "<html><body><h2>Tech &amp; Design Watch</h2><ul>{}</ul></body></html>",
        items
    )
}

/// Sends the article list as an HTML email over an authenticated STARTTLS
/// submission. Success and failure are logged locally, never raised.
pub async fn send_digest_email(articles: &[Article], config: &Config) {
    let from: Mailbox = match config.email_sender.parse() {
        Ok(mailbox) => mailbox,
        Err(err) => {
            error!(" !! Invalid email sender {:?}: {}", config.email_sender, err);
            return;
        }
    };
    let to: Mailbox = match config.email_receiver.parse() {
        Ok(mailbox) => mailbox,
        Err(err) => {
            error!(" !! Invalid email receiver {:?}: {}", config.email_receiver, err);
            return;
        }
    };

    let subject = format!("Tech & Design Watch - {}", Local::now().format("%Y-%m-%d"));
    let message = match Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(digest_html(articles))
    {
        Ok(message) => message,
        Err(err) => {
            error!(" !! Failed to build digest email: {}", err);
            return;
        }
    };

    let mailer = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host) {
        Ok(builder) => builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.email_sender.clone(),
                config.email_password.clone(),
            ))
            .build(),
        Err(err) => {
            error!(" !! Failed to build SMTP transport for {}: {}", config.smtp_host, err);
            return;
        }
    };

    match mailer.send(message).await {
        Ok(_) => info!(" ** Digest email sent to {}", config.email_receiver),
        Err(err) => error!(" !! Error sending digest email: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_has_one_bullet_per_article() {
        let articles = vec![
            Article::new("One", "https://example.com/1", ""),
            Article::new("Two", "https://example.com/2", ""),
        ];
        let html = digest_html(&articles);
        assert!(html.contains(r#"<li><a href="https://example.com/1">One</a></li>"#));
        assert!(html.contains(r#"<li><a href="https://example.com/2">Two</a></li>"#));
    }

    #[test]
    fn empty_set_yields_empty_bullet_list() {
        let html = digest_html(&[]);
        assert!(html.contains("<ul></ul>"));
    }
}
