//! Lookup tables from configuration-routine and test-case identifiers to
//! constructors.
//!
//! Identifiers in `tests.yaml` are plain strings such as `juju.wait_for_active`.
//! Each one must be registered before a run; unknown identifiers fail the phase
//! that asked for them.

pub mod builtin;

use crate::error::PhaseError;
use crate::lifecycle::ModelContext;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Setup step run against a freshly deployed model.
#[async_trait]
pub trait ConfigureRoutine: Send + Sync {
    async fn run(&self, ctx: &ModelContext) -> anyhow::Result<()>;
}

/// One functional test unit.
#[async_trait]
pub trait TestCase: Send + Sync {
    async fn run(&self, ctx: &ModelContext) -> anyhow::Result<()>;
}

/// Constructor of a registered configuration routine
pub type RoutineFactory = fn() -> Box<dyn ConfigureRoutine>;

/// Constructor of a registered test case
pub type TestFactory = fn() -> Box<dyn TestCase>;

pub type ConfigureRegistry = Registry<RoutineFactory>;
pub type TestRegistry = Registry<TestFactory>;

/// Identifier to constructor table.
#[derive(Debug, Clone)]
pub struct Registry<F> {
    kind: &'static str,
    entries: BTreeMap<String, F>,
}

impl<F: Copy> Registry<F> {
    /// Empty registry; `kind` names the entries in error messages.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace the constructor for `identifier`.
    pub fn register(&mut self, identifier: impl Into<String>, factory: F) -> &mut Self {
        let identifier = identifier.into();
        if self.entries.insert(identifier.clone(), factory).is_some() {
            log::debug!("Replaced registered {} '{}'", self.kind, identifier);
        }
        self
    }

    pub fn resolve(&self, identifier: &str) -> Result<F, PhaseError> {
        self.entries
            .get(identifier)
            .copied()
            .ok_or_else(|| PhaseError::UnknownIdentifier {
                kind: self.kind,
                identifier: identifier.to_string(),
            })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Registered identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for ConfigureRegistry {
    fn default() -> Self {
        Self::new("configure routine")
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new("test case")
    }
}
