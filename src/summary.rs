//! Prose digest of the retained articles.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::article::Article;
use crate::llm::Completion;
use crate::prompts::{digest_prompt, EMPTY_DIGEST_FALLBACK};
use crate::TARGET_LLM_REQUEST;

/// Asks the model for a prose summary of the retained articles.
///
/// An empty input returns [`EMPTY_DIGEST_FALLBACK`] verbatim without
/// invoking the model; a failed model call degrades to the same fallback.
/// The model's output is treated as opaque prose.
pub async fn summarize_articles(articles: &[Article], llm: &dyn Completion) -> String {
    if articles.is_empty() {
        return EMPTY_DIGEST_FALLBACK.to_string();
    }

    let listing = articles
        .iter()
        .map(|article| format!("{} - {}", article.title, article.url))
        .collect::<Vec<_>>()
        .join("\n");

    match llm.complete(&digest_prompt(&listing)).await {
        Some(digest) => digest,
        None => {
            error!(target: TARGET_LLM_REQUEST, "Digest generation failed, using fallback");
            EMPTY_DIGEST_FALLBACK.to_string()
        }
    }
}

/// Writes the digest to disk. A write failure is logged, not raised.
pub fn write_digest(path: &Path, digest: &str) {
    match fs::write(path, digest) {
        Ok(()) => info!("Digest written to {}", path.display()),
        Err(err) => error!("Failed to write digest to {}: {}", path.display(), err),
    }
}
