// tests/notify_source.rs
//
// Native-notification source against a real directory.

#![cfg(any(target_os = "linux", target_os = "macos"))]

use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::tempdir;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use qmdwatch::engine::{CoreWatcher, Runtime, RuntimeEvent, WatchState};
use qmdwatch::errors::Result as WatchResult;
use qmdwatch::fs::RealFileSystem;
use qmdwatch::status::{format_timestamp, StatusReporter};
use qmdwatch::watch::{spawn_notify_source, WatcherHandle};
use qmdwatch_test_utils::builders::SharedBuffer;
use qmdwatch_test_utils::fake_renderer::FakeRenderer;
use qmdwatch_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn set_mtime(path: &Path, t: SystemTime) -> std::io::Result<()> {
    File::options().write(true).open(path)?.set_modified(t)
}

struct Running {
    tx: mpsc::Sender<RuntimeEvent>,
    rendered: Arc<Mutex<Vec<PathBuf>>>,
    status: SharedBuffer,
    run: JoinHandle<WatchResult<()>>,
    _watcher: WatcherHandle,
}

/// Start the notify source and a runtime over `doc`, which must exist.
async fn start(doc: &Path) -> Result<Running, Box<dyn Error>> {
    let fs = Arc::new(RealFileSystem);
    let state = WatchState::initialize(fs.as_ref(), doc.to_path_buf())?;
    let rendered = Arc::new(Mutex::new(Vec::new()));
    let status = SharedBuffer::default();

    let (tx, rx) = mpsc::channel(1);
    let watcher = spawn_notify_source(doc, tx.clone())?;
    let runtime = Runtime::new(
        CoreWatcher::new(state),
        fs,
        FakeRenderer::new(Arc::clone(&rendered)),
        StatusReporter::new(Box::new(status.clone())),
        rx,
    );
    let run = tokio::spawn(runtime.run());

    // Let the backend settle before touching the directory.
    tokio::time::sleep(Duration::from_millis(100)).await;

    Ok(Running {
        tx,
        rendered,
        status,
        run,
        _watcher: watcher,
    })
}

async fn wait_for_status(status: &SharedBuffer, expected: &str) {
    with_timeout(async {
        while status.lines().last().map(String::as_str) != Some(expected) {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
}

#[tokio::test]
async fn save_via_rename_renders_once() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let doc = dir.path().join("report.qmd");
    fs::write(&doc, "draft")?;

    let t0 = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let t1 = t0 + Duration::from_secs(3);
    set_mtime(&doc, t0)?;

    let running = start(&doc).await?;
    assert!(running.rendered.lock().unwrap().is_empty());

    // Write a sibling, stamp it, move it over the target.
    let tmp = dir.path().join(".report.qmd.tmp");
    fs::write(&tmp, "final")?;
    set_mtime(&tmp, t1)?;
    fs::rename(&tmp, &doc)?;

    wait_for_status(&running.status, &format_timestamp(t1)).await;

    // Unrelated files in the same directory wake nothing.
    fs::write(dir.path().join("report.html"), "<html/>")?;
    tokio::time::sleep(Duration::from_millis(200)).await;

    running.tx.send(RuntimeEvent::ShutdownRequested).await?;
    with_timeout(running.run).await??;

    assert_eq!(*running.rendered.lock().unwrap(), vec![doc]);
    assert_eq!(running.status.lines(), vec![format_timestamp(t1)]);
    Ok(())
}

#[tokio::test]
async fn backup_style_save_keeps_watching() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let doc = dir.path().join("report.qmd");
    let backup = dir.path().join("report.qmd~");
    fs::write(&doc, "draft")?;

    let t0 = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let t2 = t0 + Duration::from_secs(7);
    set_mtime(&doc, t0)?;

    let running = start(&doc).await?;

    // Move the original aside; the target is briefly missing.
    fs::rename(&doc, &backup)?;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!running.run.is_finished(), "runtime stopped on rename-away");

    fs::write(&doc, "final")?;
    set_mtime(&doc, t2)?;

    wait_for_status(&running.status, &format_timestamp(t2)).await;
    assert!(!running.run.is_finished());
    assert!(!running.rendered.lock().unwrap().is_empty());

    running.tx.send(RuntimeEvent::ShutdownRequested).await?;
    with_timeout(running.run).await??;
    Ok(())
}

#[tokio::test]
async fn watcher_outlives_runtime_quietly() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let doc = dir.path().join("report.qmd");
    fs::write(&doc, "draft")?;

    let running = start(&doc).await?;
    running.tx.send(RuntimeEvent::ShutdownRequested).await?;
    with_timeout(running.run).await??;

    // Events after shutdown have nowhere to go and must not panic the
    // callback or the forwarding task.
    fs::write(&doc, "late edit")?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    fs::write(&doc, "another late edit")?;
    tokio::time::sleep(Duration::from_millis(100)).await;

    drop(running._watcher);
    Ok(())
}
