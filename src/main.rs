use anyhow::Result;
use tracing::info;

use techpulse::config::Config;
use techpulse::llm::OllamaCompletion;
use techpulse::{logging, pipeline};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::configure_logging();

    let config = Config::from_env();

    info!(
        "Connecting to Ollama at {}:{} with model {}",
        config.ollama_host, config.ollama_port, config.ollama_model
    );
    let completion = OllamaCompletion::new(
        config.ollama_host.clone(),
        config.ollama_port,
        config.ollama_model.clone(),
        config.llm_temperature,
    );

    let http = reqwest::Client::builder().gzip(true).build()?;

    pipeline::run(&config, &completion, &http).await;

    info!("Watch run complete");
    Ok(())
}
