//! Terminal front end for the summarize form.
//!
//! Usage: `summarize <youtube-url>`. `API_URL` and `SUMMARIZE_PATH` select the endpoint.

use std::process::ExitCode;

use tracing::debug;
use yt_summary_web::{
    client::SummaryClient,
    config::ClientConfig,
    form::{FormController, SubmitOutcome},
    logging,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: summarize <youtube-url>");
        return ExitCode::from(2);
    };

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = SummaryClient::new(&config);
    debug!(endpoint = client.endpoint(), "Using summarize endpoint");

    let mut form = FormController::new(client);
    form.update_url(url);

    eprintln!("Summarizing...");
    let outcome = form.submit().await;
    let state = form.state();

    match outcome {
        SubmitOutcome::Summarized => {
            if let Some(player) = state.player_url() {
                println!("Video: {}\n", player);
            }
            println!("Summary\n\n{}", state.summary);
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed => {
            eprintln!("{}", state.error);
            ExitCode::FAILURE
        }
        SubmitOutcome::Ignored => {
            eprintln!("usage: summarize <youtube-url>");
            ExitCode::from(2)
        }
    }
}
