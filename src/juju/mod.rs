//! Thin async wrapper around the `juju` command-line client.

mod status;

pub use status::{ApplicationStatus, ModelStatus, StatusInfo};

use crate::error::{CliError, PhaseError};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Handle on a `juju` binary.
#[derive(Debug, Clone)]
pub struct JujuCli {
    binary: PathBuf,
}

impl JujuCli {
    /// Use an explicit `juju` binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Find `juju` on `PATH`.
    pub fn locate() -> Result<Self, CliError> {
        match which::which("juju") {
            Ok(path) => {
                log::debug!("Found juju at: {}", path.display());
                Ok(Self::new(path))
            }
            Err(e) => Err(CliError::ExecutionFailed {
                command: "juju".to_string(),
                reason: format!(
                    "juju command not found: {}\n\
                     \n\
                     Install the Juju client and bootstrap a controller before running\n\
                     functional tests: https://juju.is/docs/olm/installing-juju",
                    e
                ),
            }),
        }
    }

    /// Path of the binary this handle runs.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run `juju <args>` to completion and return its stdout.
    ///
    /// Stdout and stderr are captured; a non-zero exit becomes
    /// [`PhaseError::CommandFailed`] carrying stderr.
    pub async fn run<I, S>(&self, args: I) -> Result<String, PhaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let command = format!("juju {}", args.join(" "));
        log::debug!("Running: {}", command);

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| PhaseError::CommandFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PhaseError::CommandFailed {
                command,
                reason: format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Fetch and parse `juju status` for `model`.
    pub async fn status(&self, model: &str) -> Result<ModelStatus, PhaseError> {
        let stdout = self.run(["status", "-m", model, "--format=json"]).await?;
        ModelStatus::from_json(&stdout).map_err(|e| PhaseError::CommandFailed {
            command: format!("juju status -m {model} --format=json"),
            reason: format!("unparseable status output: {e}"),
        })
    }
}
