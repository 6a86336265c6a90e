// src/engine/mod.rs

//! Watch/render engine.
//!
//! The pure state machine lives in [`core`]; the async/IO shell that reads
//! modification times, runs the renderer and prints status is in
//! [`runtime`].

use std::path::PathBuf;

/// Why the runtime woke up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A polling interval elapsed.
    Tick,
    /// A native filesystem notification named the target.
    FsEvent { path: PathBuf },
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

impl RuntimeEvent {
    /// Whether this event asks the runtime to look at the target again.
    pub fn is_check(&self) -> bool {
        matches!(self, RuntimeEvent::Tick | RuntimeEvent::FsEvent { .. })
    }
}

pub mod core;
pub mod runtime;
pub mod state;

pub use self::core::{CoreCommand, CoreStep, CoreWatcher};
pub use runtime::Runtime;
pub use state::WatchState;
