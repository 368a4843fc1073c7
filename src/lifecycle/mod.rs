//! Functional test lifecycle: provision, deploy, configure, test, teardown.
//!
//! The [`FuncTestRunner`] decides which bundles to exercise and in what order;
//! everything that touches a real model goes through a [`LifecyclePhases`]
//! implementation. [`JujuPhases`] is the production one, tests substitute a
//! recording mock.
//!
//! # Example
//!
//! ```no_run
//! use charm_lifecycle::lifecycle::{BundleSelector, FuncTestRunner, JujuPhases, RunOptions};
//!
//! # async fn example() -> charm_lifecycle::Result<()> {
//! let phases = JujuPhases::discover()?;
//! let runner = FuncTestRunner::new(&phases);
//!
//! runner
//!     .run(&RunOptions {
//!         keep_model: true,
//!         selector: BundleSelector::Smoke,
//!         config: None,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod naming;
pub mod phases;
mod runner;

pub use naming::{MODEL_NAME_PREFIX, MODEL_SUFFIX_LEN, generate_model_name};
pub use phases::JujuPhases;
pub use runner::{BundleRun, BundleSelector, FuncTestRunner, RunOptions};

use crate::error::PhaseError;
use crate::juju::JujuCli;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;

/// One step of a bundle's lifecycle, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Provision,
    Deploy,
    Configure,
    Test,
    Teardown,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Provision,
        Phase::Deploy,
        Phase::Configure,
        Phase::Test,
        Phase::Teardown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Provision => "provision",
            Phase::Deploy => "deploy",
            Phase::Configure => "configure",
            Phase::Test => "test",
            Phase::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five collaborator calls the runner drives for every bundle.
///
/// Implementations surface backend failures unchanged; the runner treats any
/// error as fatal to the whole run.
#[async_trait]
pub trait LifecyclePhases: Send + Sync {
    /// Create the isolated model `model`.
    async fn provision(&self, model: &str) -> Result<(), PhaseError>;

    /// Apply the bundle description at `bundle` to `model`.
    async fn deploy(&self, bundle: &Path, model: &str) -> Result<(), PhaseError>;

    /// Run the named configuration routines against `model`, in order.
    async fn configure(&self, model: &str, routines: &[String]) -> Result<(), PhaseError>;

    /// Run the named test cases against `model`, in order.
    async fn test(&self, model: &str, tests: &[String]) -> Result<(), PhaseError>;

    /// Destroy `model`.
    async fn teardown(&self, model: &str) -> Result<(), PhaseError>;
}

/// Model a routine or test case runs against.
///
/// Passed explicitly to every registered routine so nothing has to look the
/// active model up from process state.
#[derive(Debug, Clone)]
pub struct ModelContext {
    model_name: String,
    juju: JujuCli,
}

impl ModelContext {
    pub fn new(model_name: impl Into<String>, juju: JujuCli) -> Self {
        Self {
            model_name: model_name.into(),
            juju,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn juju(&self) -> &JujuCli {
        &self.juju
    }
}
