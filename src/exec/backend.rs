// src/exec/backend.rs

//! Pluggable renderer abstraction.
//!
//! The runtime awaits `Renderer::render` inline, so renders never overlap
//! and a slow render delays the next check.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tracing::{error, info, warn};

use crate::errors::Result;

use super::command::{expand_command, run_shell_command};

/// How a render invocation ended.
///
/// The watch loop logs this but never acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Success,
    /// Nonzero exit code, or `-1` if the process could not be spawned or
    /// was killed by a signal.
    Failed(i32),
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Success)
    }
}

/// Trait abstracting how a changed document is rendered.
///
/// Production code uses [`ShellRenderer`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait Renderer: Send {
    fn render(
        &mut self,
        target: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<RenderOutcome>> + Send + '_>>;
}

/// Runs the configured command template through the platform shell.
#[derive(Debug, Clone)]
pub struct ShellRenderer {
    template: String,
}

impl ShellRenderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Renderer for ShellRenderer {
    fn render(
        &mut self,
        target: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<RenderOutcome>> + Send + '_>> {
        let cmd = expand_command(&self.template, target);

        Box::pin(async move {
            info!(cmd = %cmd, "rendering");

            // Render failures never stop the watcher.
            let outcome = match run_shell_command(&cmd).await {
                Ok(status) => match status.code() {
                    Some(0) => RenderOutcome::Success,
                    Some(code) => RenderOutcome::Failed(code),
                    None => RenderOutcome::Failed(-1),
                },
                Err(err) => {
                    error!(cmd = %cmd, error = %err, "failed to run render command");
                    RenderOutcome::Failed(-1)
                }
            };

            match outcome {
                RenderOutcome::Success => info!(cmd = %cmd, "render finished"),
                RenderOutcome::Failed(code) => {
                    warn!(cmd = %cmd, exit_code = code, "render command failed")
                }
            }

            Ok(outcome)
        })
    }
}
