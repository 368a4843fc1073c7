//! Deploy phase.

use crate::error::PhaseError;
use crate::juju::JujuCli;
use std::path::Path;

/// `juju deploy -m <model> <bundle>`.
pub async fn deploy(juju: &JujuCli, bundle: &Path, model: &str) -> Result<(), PhaseError> {
    log::info!("Deploying bundle {} into {}", bundle.display(), model);

    let bundle = bundle.to_string_lossy();
    juju.run(["deploy", "-m", model, &*bundle]).await?;
    Ok(())
}
