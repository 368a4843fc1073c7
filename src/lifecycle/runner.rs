//! Lifecycle runner: bundle selection, phase sequencing and model retention.

use super::{LifecyclePhases, Phase, generate_model_name};
use crate::config::{BUNDLE_DIR, TestConfig, bundle_path, load_test_config};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Which bundle list drives a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BundleSelector {
    /// `gate_bundles`
    #[default]
    Gate,
    /// `smoke_bundles`
    Smoke,
    /// `dev_bundles`
    Dev,
    /// A single bundle named on the command line
    Explicit(String),
}

impl BundleSelector {
    /// Bundles to exercise, in order.
    pub fn resolve(&self, config: &TestConfig) -> Result<Vec<String>> {
        let bundles = match self {
            BundleSelector::Explicit(bundle) => return Ok(vec![bundle.clone()]),
            BundleSelector::Smoke => config.smoke_bundles()?,
            BundleSelector::Dev => config.dev_bundles()?,
            BundleSelector::Gate => config.gate_bundles()?,
        };
        Ok(bundles.to_vec())
    }
}

/// Options for one invocation of [`FuncTestRunner::run`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Leave the last bundle's model standing for artifact collection
    pub keep_model: bool,
    pub selector: BundleSelector,
    /// Test config path; [`crate::config::DEFAULT_TEST_CONFIG`] when unset
    pub config: Option<PathBuf>,
}

/// Planned lifecycle for one bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRun {
    pub bundle: String,
    /// Whether the model is destroyed once its tests pass
    pub teardown: bool,
}

impl BundleRun {
    /// Pair each bundle with its teardown decision.
    ///
    /// Only the final position is ever kept, and only with `keep_model`; the
    /// same bundle appearing earlier in the list is still torn down.
    pub fn plan(bundles: &[String], keep_model: bool) -> Vec<BundleRun> {
        let last = bundles.len().saturating_sub(1);
        bundles
            .iter()
            .enumerate()
            .map(|(index, bundle)| BundleRun {
                bundle: bundle.clone(),
                teardown: !(keep_model && index == last),
            })
            .collect()
    }
}

/// Drives provision → deploy → configure → test → teardown for each bundle.
///
/// Bundles run strictly one after another and each gets a freshly named model.
/// The first failing phase aborts the run and leaves that bundle's model as is.
pub struct FuncTestRunner<'a, P: ?Sized> {
    phases: &'a P,
    bundle_dir: PathBuf,
    namer: fn() -> String,
}

impl<'a, P: LifecyclePhases + ?Sized> FuncTestRunner<'a, P> {
    pub fn new(phases: &'a P) -> Self {
        Self {
            phases,
            bundle_dir: PathBuf::from(BUNDLE_DIR),
            namer: generate_model_name,
        }
    }

    /// Read bundle descriptions from `dir` instead of [`BUNDLE_DIR`].
    pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = dir.into();
        self
    }

    /// Replace the model name generator.
    pub fn with_namer(mut self, namer: fn() -> String) -> Self {
        self.namer = namer;
        self
    }

    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    /// Load the test config and run every selected bundle.
    pub async fn run(&self, options: &RunOptions) -> Result<()> {
        let config = load_test_config(options.config.as_deref())?;
        self.run_with_config(&config, options).await
    }

    /// Same as [`run`](Self::run) with an already loaded config.
    pub async fn run_with_config(&self, config: &TestConfig, options: &RunOptions) -> Result<()> {
        let bundles = options.selector.resolve(config)?;

        if bundles.is_empty() {
            log::warn!("No bundles selected by {:?}, nothing to run", options.selector);
            return Ok(());
        }

        log::info!("Running {} bundle(s): {}", bundles.len(), bundles.join(", "));

        for run in BundleRun::plan(&bundles, options.keep_model) {
            self.run_bundle(&run, config).await?;
        }

        Ok(())
    }

    async fn run_bundle(&self, run: &BundleRun, config: &TestConfig) -> Result<()> {
        let model = (self.namer)();
        log::info!("Bundle {} will use model {}", run.bundle, model);

        for phase in Phase::ALL {
            log::debug!("{}: starting {}", model, phase);
            match phase {
                Phase::Provision => self.phases.provision(&model).await?,
                Phase::Deploy => {
                    let path = bundle_path(&self.bundle_dir, &run.bundle);
                    self.phases.deploy(&path, &model).await?
                }
                Phase::Configure => self.phases.configure(&model, &config.configure).await?,
                Phase::Test => self.phases.test(&model, &config.tests).await?,
                Phase::Teardown if run.teardown => self.phases.teardown(&model).await?,
                Phase::Teardown => {
                    log::info!("Keeping model {} from the last bundle", model);
                }
            }
        }

        Ok(())
    }
}
