//! Phase adapters backed by the `juju` client.
//!
//! Each submodule holds one delegating call: provision and teardown manage the
//! model, deploy applies a bundle, configure and test resolve identifiers
//! through the registries and run them against a [`ModelContext`].
//!
//! [`ModelContext`]: super::ModelContext

mod configure;
mod deploy;
mod provision;
mod teardown;

pub use configure::configure;
pub use deploy::deploy;
pub use provision::{MODEL_DEFAULTS, provision};
pub use teardown::teardown;
pub use test::run_tests;

use super::LifecyclePhases;
use crate::error::{CliError, PhaseError};
use crate::juju::JujuCli;
use crate::registry::{ConfigureRegistry, TestRegistry, builtin};
use async_trait::async_trait;
use std::path::Path;

/// Production [`LifecyclePhases`] implementation.
#[derive(Debug, Clone)]
pub struct JujuPhases {
    juju: JujuCli,
    routines: ConfigureRegistry,
    tests: TestRegistry,
}

impl JujuPhases {
    pub fn new(juju: JujuCli, routines: ConfigureRegistry, tests: TestRegistry) -> Self {
        Self {
            juju,
            routines,
            tests,
        }
    }

    /// Locate `juju` on `PATH` and register the built-in routines and tests.
    pub fn discover() -> Result<Self, CliError> {
        Ok(Self::new(
            JujuCli::locate()?,
            builtin::configure_registry(),
            builtin::test_registry(),
        ))
    }

    pub fn juju(&self) -> &JujuCli {
        &self.juju
    }

    pub fn routines_mut(&mut self) -> &mut ConfigureRegistry {
        &mut self.routines
    }

    pub fn tests_mut(&mut self) -> &mut TestRegistry {
        &mut self.tests
    }
}

#[async_trait]
impl LifecyclePhases for JujuPhases {
    async fn provision(&self, model: &str) -> Result<(), PhaseError> {
        provision(&self.juju, model).await
    }

    async fn deploy(&self, bundle: &Path, model: &str) -> Result<(), PhaseError> {
        deploy(&self.juju, bundle, model).await
    }

    async fn configure(&self, model: &str, routines: &[String]) -> Result<(), PhaseError> {
        configure(&self.juju, &self.routines, model, routines).await
    }

    async fn test(&self, model: &str, tests: &[String]) -> Result<(), PhaseError> {
        run_tests(&self.juju, &self.tests, model, tests).await
    }

    async fn teardown(&self, model: &str) -> Result<(), PhaseError> {
        teardown(&self.juju, model).await
    }
}
