#![allow(dead_code)]

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;

use qmdwatch::engine::{CoreWatcher, Runtime, RuntimeEvent, WatchState};
use qmdwatch::exec::RenderOutcome;
use qmdwatch::fs::mock::MockFileSystem;
use qmdwatch::status::StatusReporter;

use crate::fake_renderer::FakeRenderer;

/// `UNIX_EPOCH + secs`, for readable test timestamps.
pub fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// `Write` sink whose contents can be inspected after the writer was moved.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Everything a runtime test needs to drive and observe the watcher.
pub struct Harness {
    pub fs: MockFileSystem,
    pub target: PathBuf,
    pub tx: mpsc::Sender<RuntimeEvent>,
    pub rendered: Arc<Mutex<Vec<PathBuf>>>,
    pub status: SharedBuffer,
    pub runtime: Runtime<FakeRenderer>,
}

impl Harness {
    pub fn rendered(&self) -> Vec<PathBuf> {
        self.rendered.lock().unwrap().clone()
    }
}

/// Builder for a [`Harness`] over a [`MockFileSystem`] and [`FakeRenderer`].
pub struct HarnessBuilder {
    target: PathBuf,
    initial: SystemTime,
    outcome: RenderOutcome,
    capacity: usize,
}

impl HarnessBuilder {
    pub fn new(target: impl AsRef<Path>, initial: SystemTime) -> Self {
        Self {
            target: target.as_ref().to_path_buf(),
            initial,
            outcome: RenderOutcome::Success,
            capacity: 16,
        }
    }

    pub fn render_outcome(mut self, outcome: RenderOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Harness {
        let fs = MockFileSystem::new();
        fs.add_file(&self.target, self.initial);

        let state = WatchState::initialize(&fs, self.target.clone())
            .expect("target was just added to the mock filesystem");

        let rendered = Arc::new(Mutex::new(Vec::new()));
        let renderer = FakeRenderer::new(Arc::clone(&rendered)).with_outcome(self.outcome);

        let status = SharedBuffer::default();
        let reporter = StatusReporter::new(Box::new(status.clone()));

        let (tx, rx) = mpsc::channel(self.capacity);
        let runtime = Runtime::new(
            CoreWatcher::new(state),
            Arc::new(fs.clone()),
            renderer,
            reporter,
            rx,
        );

        Harness {
            fs,
            target: self.target,
            tx,
            rendered,
            status,
            runtime,
        }
    }
}
