//! Configure phase: run registered setup routines in order.

use crate::error::PhaseError;
use crate::juju::JujuCli;
use crate::lifecycle::ModelContext;
use crate::registry::ConfigureRegistry;

/// Resolve and run each routine against `model`.
///
/// Every identifier is resolved before the first routine starts, so a typo in
/// `tests.yaml` fails the phase without touching the model.
pub async fn configure(
    juju: &JujuCli,
    registry: &ConfigureRegistry,
    model: &str,
    routines: &[String],
) -> Result<(), PhaseError> {
    let factories = routines
        .iter()
        .map(|id| registry.resolve(id).map(|factory| (id, factory)))
        .collect::<Result<Vec<_>, _>>()?;

    let ctx = ModelContext::new(model, juju.clone());

    for (id, factory) in factories {
        log::info!("Running configure routine {}", id);
        factory()
            .run(&ctx)
            .await
            .map_err(|source| PhaseError::RoutineFailed {
                routine: id.clone(),
                source,
            })?;
    }

    Ok(())
}
