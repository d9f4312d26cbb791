use async_trait::async_trait;
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::generation::options::GenerationOptions;
use ollama_rs::Ollama;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::TARGET_LLM_REQUEST;

const LLM_TIMEOUT: Duration = Duration::from_secs(120);

/// Prompt-completion endpoint used for relevance scoring and digest prose.
///
/// Stages take this as an explicitly constructed dependency so tests can
/// substitute a scripted fake.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Sends one prompt and returns the raw response text, or `None` when
    /// the call fails or times out. One attempt, no retry.
    async fn complete(&self, prompt: &str) -> Option<String>;
}

/// Ollama-backed completion client.
pub struct OllamaCompletion {
    client: Ollama,
    model: String,
    temperature: f32,
}

impl OllamaCompletion {
    pub fn new(host: String, port: u16, model: String, temperature: f32) -> Self {
        OllamaCompletion {
            client: Ollama::new(host, port),
            model,
            temperature,
        }
    }
}

#[async_trait]
impl Completion for OllamaCompletion {
    async fn complete(&self, prompt: &str) -> Option<String> {
        debug!(target: TARGET_LLM_REQUEST, "Sending LLM request with prompt: {}", prompt);

        let mut request = GenerationRequest::new(self.model.clone(), prompt.to_string());
        request.options = Some(GenerationOptions::default().temperature(self.temperature));

        match timeout(LLM_TIMEOUT, self.client.generate(request)).await {
            Ok(Ok(response)) => {
                debug!(target: TARGET_LLM_REQUEST, "LLM response received: {}", response.response);
                Some(response.response)
            }
            Ok(Err(e)) => {
                warn!(target: TARGET_LLM_REQUEST, "Error generating response: {}", e);
                None
            }
            Err(_) => {
                warn!(target: TARGET_LLM_REQUEST, "LLM request timed out");
                None
            }
        }
    }
}
