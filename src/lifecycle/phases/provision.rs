//! Provision phase: create the model.

use crate::error::PhaseError;
use crate::juju::JujuCli;

/// Model config applied to every test model.
pub const MODEL_DEFAULTS: &[(&str, &str)] = &[
    ("test-mode", "true"),
    ("transmit-vendor-metrics", "false"),
    ("enable-os-upgrade", "false"),
    ("automatically-retry-hooks", "false"),
    ("use-default-secgroup", "true"),
];

/// `juju add-model <model>` with [`MODEL_DEFAULTS`].
pub async fn provision(juju: &JujuCli, model: &str) -> Result<(), PhaseError> {
    log::info!("Adding model {}", model);

    let mut args = vec!["add-model".to_string(), model.to_string()];
    for (key, value) in MODEL_DEFAULTS {
        args.push("--config".to_string());
        args.push(format!("{key}={value}"));
    }

    juju.run(&args).await?;
    Ok(())
}
