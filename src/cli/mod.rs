//! Command line interface for the functional test runner.
//!
//! Both binaries validate their arguments before the logger is initialised or
//! any model is touched.

mod args;
mod test_args;

pub use args::{Args, Invocation, parse_log_level};
pub use test_args::TestArgs;

use crate::config::load_test_config;
use crate::error::Result;
use crate::lifecycle::{FuncTestRunner, JujuPhases, LifecyclePhases};
use log::LevelFilter;

/// Entry point of `func_test_runner`
pub async fn run() -> Result<()> {
    let invocation = Args::parse_args().validate()?;
    init_logging(invocation.log_level);

    // A broken config is reported even on hosts without `juju`
    let config = load_test_config(invocation.options.config.as_deref())?;
    let phases = JujuPhases::discover()?;
    FuncTestRunner::new(&phases)
        .run_with_config(&config, &invocation.options)
        .await
}

/// Run a validated invocation against `phases`.
pub async fn execute<P>(invocation: &Invocation, phases: &P) -> Result<()>
where
    P: LifecyclePhases + ?Sized,
{
    FuncTestRunner::new(phases).run(&invocation.options).await
}

/// Entry point of `charm_test`
pub async fn run_tests() -> Result<()> {
    let args = TestArgs::parse_args();
    init_logging(args.log_level()?);

    let tests = args.resolve_tests()?;
    let phases = JujuPhases::discover()?;
    phases.test(&args.model_name, &tests).await?;
    Ok(())
}

/// Initialise `env_logger` at `level`.
///
/// `RUST_LOG` can still raise or lower individual modules. Repeated calls are
/// ignored.
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
