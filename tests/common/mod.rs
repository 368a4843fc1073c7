//! Recording stand-in for the Juju-backed phases.

#![allow(dead_code)]

use async_trait::async_trait;
use charm_lifecycle::PhaseError;
use charm_lifecycle::lifecycle::{LifecyclePhases, Phase};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One collaborator call, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Provision(String),
    Deploy(PathBuf, String),
    Configure(String, Vec<String>),
    Test(String, Vec<String>),
    Teardown(String),
}

impl Call {
    pub fn phase(&self) -> Phase {
        match self {
            Call::Provision(_) => Phase::Provision,
            Call::Deploy(..) => Phase::Deploy,
            Call::Configure(..) => Phase::Configure,
            Call::Test(..) => Phase::Test,
            Call::Teardown(_) => Phase::Teardown,
        }
    }
}

/// Records every call; optionally fails the n-th call of one phase.
#[derive(Default)]
pub struct RecordingPhases {
    calls: Mutex<Vec<Call>>,
    fail_at: Option<(Phase, usize)>,
}

impl RecordingPhases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `nth` (1-based) call of `phase`.
    pub fn failing_at(phase: Phase, nth: usize) -> Self {
        Self {
            calls: Mutex::default(),
            fail_at: Some((phase, nth)),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, phase: Phase) -> usize {
        self.calls().iter().filter(|c| c.phase() == phase).count()
    }

    pub fn deployed(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Deploy(path, _) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<(), PhaseError> {
        let phase = call.phase();
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);

        match self.fail_at {
            Some((fail_phase, nth))
                if fail_phase == phase
                    && calls.iter().filter(|c| c.phase() == phase).count() == nth =>
            {
                Err(PhaseError::CommandFailed {
                    command: format!("juju {phase}"),
                    reason: "injected failure".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl LifecyclePhases for RecordingPhases {
    async fn provision(&self, model: &str) -> Result<(), PhaseError> {
        self.record(Call::Provision(model.to_string()))
    }

    async fn deploy(&self, bundle: &Path, model: &str) -> Result<(), PhaseError> {
        self.record(Call::Deploy(bundle.to_path_buf(), model.to_string()))
    }

    async fn configure(&self, model: &str, routines: &[String]) -> Result<(), PhaseError> {
        self.record(Call::Configure(model.to_string(), routines.to_vec()))
    }

    async fn test(&self, model: &str, tests: &[String]) -> Result<(), PhaseError> {
        self.record(Call::Test(model.to_string(), tests.to_vec()))
    }

    async fn teardown(&self, model: &str) -> Result<(), PhaseError> {
        self.record(Call::Teardown(model.to_string()))
    }
}

pub const CHARM_CONFIG: &str = "\
charm_name: mycharm
gate_bundles:
  - bundle1
  - bundle2
smoke_bundles:
  - bundle2
dev_bundles:
  - bundle3
  - bundle4
configure:
  - mycharm.setup.basic_setup
  - othercharm.setup.setup
tests:
  - mycharm.tests.SmokeTest
  - mycharm.tests.ComplexTest
";

/// Write `contents` to `tests.yaml` inside a fresh temp dir.
pub fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tests.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
