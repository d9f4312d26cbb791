//! Runtime configuration, read once from the environment and passed into the
//! pipeline stages explicitly.

use std::path::PathBuf;

use crate::environment::{env_list_or, env_opt, env_or};

/// Curated tech feeds polled by default.
pub const DEFAULT_TECH_FEEDS: &[&str] = &[
    "https://news.ycombinator.com/rss",
    "https://dev.to/feed",
    "https://www.journaldunet.com/rss",
    "https://www.zdnet.fr/feeds/rss/actualites.xml",
];

/// Curated web design feeds polled by default.
pub const DEFAULT_DESIGN_FEEDS: &[&str] = &[
    "https://www.smashingmagazine.com/feed/",
    "https://www.awwwards.com/blog/feed/",
    "https://css-tricks.com/feed/",
];

pub const DEFAULT_TECH_KEYWORDS: &[&str] = &[
    "devops",
    "ia",
    "solid.js",
    "vue.js",
    "react.js",
    "next.js",
    "rust",
    "javascript",
    "css",
    "typescript",
    "mongodb",
    "cybersecurity",
    "machine learning",
    "performance",
    "php",
    "laravel",
    "python",
    "flask",
    "fastapi",
    "django",
    "go",
    "node.js",
];

pub const DEFAULT_DESIGN_KEYWORDS: &[&str] = &[
    "UI",
    "UX",
    "Figma",
    "Tailwind",
    "design trends",
    "no-code",
    "CSS",
    "typography",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub tech_feeds: Vec<String>,
    pub design_feeds: Vec<String>,
    pub tech_keywords: Vec<String>,
    pub design_keywords: Vec<String>,

    pub ollama_host: String,
    pub ollama_port: u16,
    pub ollama_model: String,
    pub llm_temperature: f32,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub email_sender: String,
    pub email_receiver: String,
    pub email_password: String,

    /// Absent webhook URL means the Discord sink is skipped entirely.
    pub discord_webhook_url: Option<String>,

    pub notion_api_url: String,
    pub notion_api_key: String,
    pub notion_database_id: String,

    pub digest_path: PathBuf,
}

impl Config {
    /// Reads the full configuration from environment variables. List-valued
    /// variables are semicolon-separated. Missing credentials are not
    /// validated here; the sinks report them at point of use.
    pub fn from_env() -> Self {
        let ollama_port = env_or("OLLAMA_PORT", "11434").parse().unwrap_or(11434);
        let smtp_port = env_or("SMTP_PORT", "587").parse().unwrap_or(587);
        let llm_temperature = env_or("LLM_TEMPERATURE", "0.0").parse().unwrap_or(0.0);

        Config {
            tech_feeds: env_list_or("TECH_FEEDS", ';', DEFAULT_TECH_FEEDS),
            design_feeds: env_list_or("DESIGN_FEEDS", ';', DEFAULT_DESIGN_FEEDS),
            tech_keywords: env_list_or("TECH_KEYWORDS", ';', DEFAULT_TECH_KEYWORDS),
            design_keywords: env_list_or("DESIGN_KEYWORDS", ';', DEFAULT_DESIGN_KEYWORDS),
            ollama_host: env_or("OLLAMA_HOST", "localhost"),
            ollama_port,
            ollama_model: env_or("OLLAMA_MODEL", "mistral"),
            llm_temperature,
            smtp_host: env_or("SMTP_HOST", "smtp.gmail.com"),
            smtp_port,
            email_sender: env_or("EMAIL_SENDER", ""),
            email_receiver: env_or("EMAIL_RECEIVER", ""),
            email_password: env_or("EMAIL_PASSWORD", ""),
            discord_webhook_url: env_opt("DISCORD_WEBHOOK_URL"),
            notion_api_url: env_or("NOTION_API_URL", "https://api.notion.com"),
            notion_api_key: env_or("NOTION_API_KEY", ""),
            notion_database_id: env_or("NOTION_DATABASE_ID", ""),
            digest_path: PathBuf::from(env_or("DIGEST_PATH", "summary.md")),
        }
    }
}
