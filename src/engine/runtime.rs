// src/engine/runtime.rs

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::Renderer;
use crate::fs::FileSystem;
use crate::status::StatusReporter;

use super::core::CoreWatcher;
use super::{CoreCommand, RuntimeEvent};

/// Async IO shell around [`CoreWatcher`].
///
/// For every check event it reads the target's modification time, lets the
/// core decide, and awaits the renderer inline when a change was seen.
pub struct Runtime<R: Renderer> {
    core: CoreWatcher,
    fs: Arc<dyn FileSystem>,
    renderer: R,
    status: StatusReporter,
    event_rx: mpsc::Receiver<RuntimeEvent>,
}

impl<R: Renderer> fmt::Debug for Runtime<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("fs", &self.fs)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> Runtime<R> {
    pub fn new(
        core: CoreWatcher,
        fs: Arc<dyn FileSystem>,
        renderer: R,
        status: StatusReporter,
        event_rx: mpsc::Receiver<RuntimeEvent>,
    ) -> Self {
        Self {
            core,
            fs,
            renderer,
            status,
            event_rx,
        }
    }

    pub fn core(&self) -> &CoreWatcher {
        &self.core
    }

    /// Main event loop.
    ///
    /// Returns `Ok(())` on shutdown or when every event sender is gone.
    /// A target that can no longer be read ends the loop with that error.
    pub async fn run(mut self) -> Result<()> {
        info!(
            path = %self.core.state().target_path().display(),
            "watch runtime started"
        );

        while let Some(event) = self.event_rx.recv().await {
            if !self.handle_event(event).await? {
                info!("shutdown requested; stopping runtime");
                return Ok(());
            }
        }

        info!("runtime event channel closed; exiting");
        Ok(())
    }

    /// Process a single event. Returns whether the loop should continue.
    pub async fn handle_event(&mut self, event: RuntimeEvent) -> Result<bool> {
        debug!(?event, "runtime received event");

        let observed = if event.is_check() {
            Some(self.fs.modified(self.core.state().target_path())?)
        } else {
            None
        };

        let step = self.core.step(&event, observed);

        for command in step.commands {
            self.execute_command(command).await?;
        }

        Ok(step.keep_running)
    }

    async fn execute_command(&mut self, command: CoreCommand) -> Result<()> {
        match command {
            CoreCommand::Render { modified } => {
                let path: PathBuf = self.core.state().target_path().to_path_buf();
                let outcome = self.renderer.render(&path).await?;
                debug!(?outcome, "render completed");

                self.core.commit_render(modified);
                self.status.rendered(modified)?;
            }
            CoreCommand::RequestExit => {
                debug!("core issued RequestExit command");
            }
        }
        Ok(())
    }
}
