//! Line-oriented console for the health assistant.
//!
//! Reads one utterance per line from stdin and prints the reply. The first
//! argument, if any, is the user id.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use health_assistant::adapters::WhitespaceTokenizer;
use health_assistant::application::{Capabilities, DialogueManager};
use health_assistant::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging);

    let lexicon = config.lexicon.load()?;
    let store = config.session.build_store();
    let capabilities = Capabilities::new().with_tokenizer(Arc::new(WhitespaceTokenizer::new()));
    let manager = DialogueManager::new(store, lexicon, capabilities, config.dialogue.settings()?);

    let user_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| manager.settings().default_user_id.to_string());

    tracing::info!(
        backend = ?config.session.backend,
        "Health assistant ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let reply = manager.respond(&line, &user_id).await;
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let fmt_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .init();
}
