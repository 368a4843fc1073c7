//! `func_test_runner` - functional test lifecycle for a charm.
//!
//! Deploys each selected bundle into a fresh Juju model, configures it, runs the
//! charm's functional tests and destroys the model again.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Logging is initialised by the CLI once `--log` has been validated
    match charm_lifecycle::cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
