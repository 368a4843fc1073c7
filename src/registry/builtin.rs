//! Routines and tests available to every charm without registration.

use super::{ConfigureRegistry, ConfigureRoutine, TestCase, TestRegistry};
use crate::lifecycle::ModelContext;
use anyhow::{Context, bail};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Longest time `juju.wait_for_active` waits for a model to settle (30 minutes)
pub const WAIT_FOR_ACTIVE_TIMEOUT: Duration = Duration::from_secs(1800);

/// Delay between `juju status` polls
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(10);

pub const WAIT_FOR_ACTIVE: &str = "juju.wait_for_active";
pub const APPLICATIONS_ACTIVE: &str = "juju.applications_active";

/// Registry holding the built-in configuration routines.
pub fn configure_registry() -> ConfigureRegistry {
    let mut registry = ConfigureRegistry::default();
    registry.register(WAIT_FOR_ACTIVE, || -> Box<dyn ConfigureRoutine> {
        Box::new(WaitForActive::default())
    });
    registry
}

/// Registry holding the built-in test cases.
pub fn test_registry() -> TestRegistry {
    let mut registry = TestRegistry::default();
    registry.register(APPLICATIONS_ACTIVE, || -> Box<dyn TestCase> {
        Box::new(ApplicationsActive)
    });
    registry
}

/// Poll `juju status` until every application reports `active`.
pub struct WaitForActive {
    timeout: Duration,
    interval: Duration,
}

impl Default for WaitForActive {
    fn default() -> Self {
        Self {
            timeout: WAIT_FOR_ACTIVE_TIMEOUT,
            interval: STATUS_POLL_INTERVAL,
        }
    }
}

#[async_trait]
impl ConfigureRoutine for WaitForActive {
    async fn run(&self, ctx: &ModelContext) -> anyhow::Result<()> {
        let deadline = Instant::now() + self.timeout;

        loop {
            let status = ctx
                .juju()
                .status(ctx.model_name())
                .await
                .context("reading model status")?;

            if let Some((app, info)) = status.first_failure() {
                bail!(
                    "application {} is {}: {}",
                    app,
                    info.current,
                    info.message.as_deref().unwrap_or("no message")
                );
            }

            if status.all_active() {
                log::info!("All applications in {} are active", ctx.model_name());
                return Ok(());
            }

            let pending: Vec<&str> = status.inactive().map(|(name, _)| name).collect();
            if Instant::now() >= deadline {
                bail!(
                    "timed out after {} minutes waiting for: {}",
                    self.timeout.as_secs() / 60,
                    pending.join(", ")
                );
            }

            log::debug!("Waiting for {} to become active", pending.join(", "));
            sleep(self.interval).await;
        }
    }
}

/// Assert that every application in the model is `active`.
pub struct ApplicationsActive;

#[async_trait]
impl TestCase for ApplicationsActive {
    async fn run(&self, ctx: &ModelContext) -> anyhow::Result<()> {
        let status = ctx.juju().status(ctx.model_name()).await?;

        let inactive: Vec<String> = status
            .inactive()
            .map(|(name, info)| format!("{name} ({})", info.current))
            .collect();

        if !inactive.is_empty() {
            bail!("applications not active: {}", inactive.join(", "));
        }

        log::info!(
            "{} application(s) active in {}",
            status.applications.len(),
            ctx.model_name()
        );
        Ok(())
    }
}
