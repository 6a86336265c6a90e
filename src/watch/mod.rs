// src/watch/mod.rs

//! Change sources.
//!
//! Both sources only wake the runtime up; neither decides whether to
//! render. That is always the modification-time comparison in the engine.
//!
//! - [`polling`]: fixed-interval ticks (default).
//! - [`watcher`]: native notifications via `notify`.

pub mod polling;
pub mod watcher;

pub use polling::spawn_polling_source;
pub use watcher::{spawn_notify_source, WatcherHandle};
