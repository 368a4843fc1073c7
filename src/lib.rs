//! Functional test lifecycle for charms.
//!
//! This library drives the provision → deploy → configure → test → teardown
//! sequence for each bundle a charm lists in its `tests/tests.yaml`:
//! - [`config`] reads the test configuration
//! - [`lifecycle`] selects bundles, names models and sequences the phases
//! - [`juju`] runs the `juju` client the production phases delegate to
//! - [`registry`] maps configure routine and test identifiers to implementations
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod juju;
pub mod lifecycle;
pub mod registry;

// Re-export commonly used types
pub use error::{CliError, ConfigError, LifecycleError, PhaseError, Result};
