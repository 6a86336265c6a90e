// src/exec/command.rs

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::debug;

/// Placeholder in the command template replaced by the document path.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Interpolate the document path into `template`.
///
/// Every `{file}` is replaced; a template without one gets the path
/// appended after a space.
pub fn expand_command(template: &str, target: &Path) -> String {
    let path = target.to_string_lossy();
    if template.contains(FILE_PLACEHOLDER) {
        template.replace(FILE_PLACEHOLDER, &path)
    } else {
        format!("{} {}", template.trim_end(), path)
    }
}

/// Run `cmd` through the platform shell and wait for it.
///
/// Stdio is inherited so the render tool's own output stays visible.
pub(crate) async fn run_shell_command(cmd: &str) -> Result<ExitStatus> {
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = command
        .spawn()
        .with_context(|| format!("spawning render command '{cmd}'"))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for render command '{cmd}'"))?;

    debug!(cmd = %cmd, exit_code = ?status.code(), "render process exited");
    Ok(status)
}
