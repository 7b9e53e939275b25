use anyhow::{Context, Result};
use fitcoach_rust::{
    config,
    llm::OpenAiClient,
    profile::{ProfileStore, WorkoutRecord},
    recommend::{RecommendationClient, RecommendationRequest},
};
use std::sync::Arc;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn parse_args() -> Result<RecommendationRequest> {
    let mut args = std::env::args().skip(1);
    let (Some(goal), Some(experience), Some(days)) = (args.next(), args.next(), args.next())
    else {
        anyhow::bail!("usage: fitcoach <goal> <experience> <days-per-week>");
    };

    let days: u32 = days
        .parse()
        .context("days-per-week must be a positive integer")?;

    Ok(RecommendationRequest::new(goal, experience, days)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Initialize tracing with the determined log level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    info!("Starting fitcoach with log level: {}", log_level);

    let request = parse_args()?;

    let chat = Arc::new(OpenAiClient::new(config.llm.clone())?);
    let client = RecommendationClient::new(&config.llm, chat)?;

    let recommendation = client.fetch_recommendation(&request).await?;

    let store = ProfileStore::new(&config.storage.database_path).await?;
    store
        .append_history(WorkoutRecord::new(
            "Generated training plan",
            format!(
                "Goal: {}, experience: {}, {} workouts per week",
                request.goal, request.experience_level, request.weekly_frequency
            ),
        ))
        .await?;

    println!("{}", serde_json::to_string_pretty(&recommendation)?);

    Ok(())
}
