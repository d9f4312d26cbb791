//! The ordered stage chain: fetch, enrich, filter, summarize, notify.
//!
//! Strictly sequential; every stage completes before the next begins, and
//! no error escalates past its stage. A run is ephemeral: no state is kept
//! between invocations and no deduplication is performed against prior runs.

use tracing::info;

use crate::config::Config;
use crate::llm::Completion;
use crate::{notify, relevance, rss, summary, trends};

pub async fn run(config: &Config, llm: &dyn Completion, http: &reqwest::Client) {
    info!(
        "Fetching {} tech and {} design feeds",
        config.tech_feeds.len(),
        config.design_feeds.len()
    );
    let mut tech_articles = rss::fetch_articles(http, &config.tech_feeds).await;
    let mut design_articles = rss::fetch_articles(http, &config.design_feeds).await;
    info!(
        "Fetched {} tech and {} design articles",
        tech_articles.len(),
        design_articles.len()
    );

    trends::enrich_articles(&mut tech_articles);
    trends::enrich_articles(&mut design_articles);

    let mut relevant =
        relevance::evaluate_relevance(tech_articles, &config.tech_keywords, llm).await;
    relevant
        .extend(relevance::evaluate_relevance(design_articles, &config.design_keywords, llm).await);
    info!("{} articles passed the relevance gate", relevant.len());

    let digest = summary::summarize_articles(&relevant, llm).await;
    summary::write_digest(&config.digest_path, &digest);

    notify::notify_all(&relevant, config, http).await;
}
