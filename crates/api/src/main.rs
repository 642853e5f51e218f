//! API server entry point.

use std::process::ExitCode;

use hello_api::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    hello_api::telemetry::init(&config);

    match hello_api::serve(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server failed");
            ExitCode::FAILURE
        }
    }
}
