//! Teardown phase: destroy the model and its storage.

use crate::error::PhaseError;
use crate::juju::JujuCli;

pub async fn teardown(juju: &JujuCli, model: &str) -> Result<(), PhaseError> {
    log::info!("Destroying model {}", model);
    juju.run(["destroy-model", model, "-y", "--destroy-storage"]).await?;
    Ok(())
}
