// src/engine/core.rs

//! Pure core state machine.
//!
//! [`CoreWatcher`] consumes a [`RuntimeEvent`] together with the
//! modification time the shell observed for it, and returns the commands
//! the shell should execute. It has no channels, no Tokio types, and does
//! not touch the filesystem, so it can be tested exhaustively.

use std::time::SystemTime;

use tracing::{debug, trace};

use crate::engine::state::WatchState;
use crate::engine::RuntimeEvent;

/// Something the IO shell should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreCommand {
    /// Run the renderer for the change to `modified`, then call
    /// [`CoreWatcher::commit_render`] with the same value.
    Render { modified: SystemTime },
    /// Stop the loop.
    RequestExit,
}

/// Result of feeding one event into the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    pub keep_running: bool,
}

impl CoreStep {
    fn idle() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: true,
        }
    }
}

#[derive(Debug)]
pub struct CoreWatcher {
    state: WatchState,
    renders: u64,
}

impl CoreWatcher {
    pub fn new(state: WatchState) -> Self {
        Self { state, renders: 0 }
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    /// Number of renders committed so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Feed one event.
    ///
    /// `observed` is the modification time the shell read for check events
    /// (`Tick`, `FsEvent`); it is ignored for `ShutdownRequested`.
    pub fn step(&mut self, event: &RuntimeEvent, observed: Option<SystemTime>) -> CoreStep {
        match event {
            RuntimeEvent::ShutdownRequested => {
                debug!("shutdown requested");
                CoreStep {
                    commands: vec![CoreCommand::RequestExit],
                    keep_running: false,
                }
            }
            RuntimeEvent::Tick | RuntimeEvent::FsEvent { .. } => {
                let Some(modified) = observed else {
                    return CoreStep::idle();
                };

                if self.state.is_changed(modified) {
                    debug!(
                        path = %self.state.target_path().display(),
                        ?modified,
                        "modification time changed"
                    );
                    CoreStep {
                        commands: vec![CoreCommand::Render { modified }],
                        keep_running: true,
                    }
                } else {
                    trace!("no change");
                    CoreStep::idle()
                }
            }
        }
    }

    /// Record that the render for `modified` has run.
    pub fn commit_render(&mut self, modified: SystemTime) {
        self.state.record_render(modified);
        self.renders += 1;
    }
}
