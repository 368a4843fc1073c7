//! Arguments for `charm_test`, which runs only the test phase.

use super::args::parse_log_level;
use crate::config::{DEFAULT_TEST_CONFIG, load_test_config};
use crate::error::{CliError, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Run functional tests against an existing model
#[derive(Parser, Debug, Clone)]
#[command(name = "charm_test", version)]
pub struct TestArgs {
    /// Space separated list of test identifiers
    #[arg(short = 't', long, num_args = 1.., value_name = "TEST")]
    pub tests: Option<Vec<String>>,

    /// Name of the model to run the tests against
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model_name: String,

    /// Configuration file in YAML format
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TEST_CONFIG)]
    pub config: PathBuf,

    /// Loglevel [DEBUG|INFO|WARN|ERROR|CRITICAL]
    #[arg(long = "log", value_name = "LEVEL", default_value = "INFO")]
    pub loglevel: String,
}

impl TestArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> std::result::Result<LevelFilter, CliError> {
        parse_log_level(&self.loglevel)
    }

    /// Tests from `--tests`, else the `tests` key of the config file.
    pub fn resolve_tests(&self) -> Result<Vec<String>> {
        match &self.tests {
            Some(tests) => Ok(tests.clone()),
            None => Ok(load_test_config(Some(self.config.as_path()))?.tests),
        }
    }
}
