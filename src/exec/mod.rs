// src/exec/mod.rs

//! Render execution layer.
//!
//! - [`backend`] provides the `Renderer` trait the runtime talks to and the
//!   production `ShellRenderer`; tests swap in a fake.
//! - [`command`] expands the command template and runs it through the
//!   platform shell using `tokio::process::Command`.

pub mod backend;
pub mod command;

pub use backend::{RenderOutcome, Renderer, ShellRenderer};
pub use command::{expand_command, FILE_PLACEHOLDER};
