use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use qmdwatch::errors::Result;
use qmdwatch::exec::{RenderOutcome, Renderer};

/// A fake renderer that:
/// - records which paths were "rendered"
/// - immediately reports the configured outcome (success by default).
#[derive(Debug, Clone)]
pub struct FakeRenderer {
    rendered: Arc<Mutex<Vec<PathBuf>>>,
    outcome: RenderOutcome,
}

impl FakeRenderer {
    pub fn new(rendered: Arc<Mutex<Vec<PathBuf>>>) -> Self {
        Self {
            rendered,
            outcome: RenderOutcome::Success,
        }
    }

    pub fn with_outcome(mut self, outcome: RenderOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

impl Renderer for FakeRenderer {
    fn render(
        &mut self,
        target: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<RenderOutcome>> + Send + '_>> {
        let target = target.to_path_buf();
        let rendered = Arc::clone(&self.rendered);
        let outcome = self.outcome;

        Box::pin(async move {
            rendered.lock().unwrap().push(target);
            Ok(outcome)
        })
    }
}
