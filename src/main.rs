use std::process::ExitCode;

use conference_model::ConferenceContent;
use eventmobi_client::{ConfigError, EventmobiClient, EventmobiConfig, FetchError};
use log::{error, info};
use thiserror::Error;

mod logs;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

fn log_summary(content: &ConferenceContent) {
    info!(
        "Synced {}: {} sessions, {} speakers, {} attendees, {} maps, {} companies",
        content.event.name,
        content.agenda.len(),
        content.speakers.len(),
        content.attendees.len(),
        content.maps.len(),
        content.companies.len()
    );
}

async fn run() -> Result<(), AppError> {
    let config = EventmobiConfig::from_env()?;
    info!("Fetching event from {}", config.event_url());

    let client = EventmobiClient::new(config)?;
    let content = client.fetch_all().await?;
    log_summary(&content);

    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine, the variables may come from the environment.
    let _ = dotenvy::dotenv();

    if let Err(e) = logs::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
