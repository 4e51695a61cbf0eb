use clap::Parser;
use tracing::info;

use activation_report::config::Config;
use activation_report::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let outcome = pipeline::export(&config)?;

    if let Some(summary) = &outcome.summary {
        info!("Summary data: {}", serde_json::to_string_pretty(summary)?);
    }

    info!(
        "Wrote {} sessions to {}{}",
        outcome.document.sessions.len(),
        config.output_path.display(),
        if outcome.degraded { " (sample data)" } else { "" }
    );

    Ok(())
}
