//! Invocation assembly and runner execution.
//!
//! Builds the structured argument list for the runner process directly; the
//! command is never round-tripped through a shell string, so values with
//! unusual characters need no quoting or escaping.

use std::process::Command;

use anyhow::{Context, Result};
use log::{debug, error, info};

use crate::environment::EnvSnapshot;
use crate::errors::DispatchError;
use crate::provider::Provider;

/// A fully assembled, validated runner command.
///
/// Only constructed after every variable required by the provider has been
/// confirmed present, so a partial invocation can never reach execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub runner: String,
    pub args: Vec<String>,
    pub test_path: String,
}

impl Invocation {
    /// Validate the snapshot for `provider`, then assemble the runner
    /// parameter list. The run name is computed once here so every
    /// invocation gets a fresh label on the cloud farms.
    pub fn assemble(
        provider: Provider,
        env: &EnvSnapshot,
        runner: &str,
        test_path: &str,
    ) -> Result<Self, DispatchError> {
        provider.validate(env)?;
        debug!("provider '{}' validated, assembling invocation", provider.name());

        let run_name = generate_run_name();
        Ok(Invocation {
            runner: runner.to_string(),
            args: provider.runner_args(env, &run_name),
            test_path: test_path.to_string(),
        })
    }

    /// Single-spaced audit form of the command, printed before execution.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.runner.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(self.test_path.as_str());
        parts.join(" ")
    }

    /// Spawn the runner, wait for it, and return its exit code unchanged.
    /// A runner killed by a signal has no code; that maps to 1.
    pub fn execute(&self) -> Result<i32> {
        info!("launching runner: {}", self.command_line());
        let status = Command::new(&self.runner)
            .args(&self.args)
            .arg(&self.test_path)
            .status()
            .with_context(|| format!("failed to launch runner '{}'", self.runner))?;

        match status.code() {
            Some(code) => {
                debug!("runner exited with code {code}");
                Ok(code)
            }
            None => {
                error!("runner terminated by signal");
                Ok(1)
            }
        }
    }
}

/// Timestamped run name, fresh per assembly. Millisecond precision keeps
/// back-to-back invocations distinct.
fn generate_run_name() -> String {
    format!("run-{}", chrono::Local::now().format("%Y%m%d-%H%M%S%.3f"))
}
