use anyhow::Context;
use tracing_subscriber::EnvFilter;

use emotion_motion_core::{config, emotion, server, viz};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::from_env_or_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(text) = cfg.text.as_deref() {
        let result = emotion::analyze(text);
        let json = serde_json::to_string(&result.to_payload()).context("encoding result")?;
        println!("{}", json);
        for line in viz::result_table(&result) {
            println!("{}", line);
        }
        return Ok(());
    }

    server::serve(&cfg)
        .await
        .with_context(|| format!("serving on {}", cfg.listen_addr()))
}
