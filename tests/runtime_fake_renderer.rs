// tests/runtime_fake_renderer.rs

use std::error::Error;
use std::path::PathBuf;

use tokio::time::{timeout, Duration};

use qmdwatch::engine::RuntimeEvent;
use qmdwatch::errors::QmdWatchError;
use qmdwatch::exec::RenderOutcome;
use qmdwatch_test_utils::builders::{at, HarnessBuilder};
use qmdwatch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn unchanged_file_is_never_rendered() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100)).build();

    for _ in 0..10 {
        assert!(h.runtime.handle_event(RuntimeEvent::Tick).await?);
    }

    assert!(h.rendered().is_empty());
    assert_eq!(h.status.contents(), "");
    assert_eq!(h.runtime.core().renders(), 0);
    Ok(())
}

#[tokio::test]
async fn single_change_renders_once_and_updates_state() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100)).build();

    h.runtime.handle_event(RuntimeEvent::Tick).await?;
    h.fs.touch("report.qmd", at(103));
    h.runtime.handle_event(RuntimeEvent::Tick).await?;

    assert_eq!(h.rendered(), vec![PathBuf::from("report.qmd")]);
    assert_eq!(h.runtime.core().state().last_modified(), at(103));
    assert_eq!(h.status.lines(), vec!["103.000000".to_string()]);

    // Later polls with the same value stay quiet.
    for _ in 0..3 {
        h.runtime.handle_event(RuntimeEvent::Tick).await?;
    }
    assert_eq!(h.rendered().len(), 1);
    Ok(())
}

#[tokio::test]
async fn two_changes_within_one_interval_collapse_into_one_render() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100)).build();

    h.fs.touch("report.qmd", at(101));
    h.fs.touch("report.qmd", at(102));
    h.runtime.handle_event(RuntimeEvent::Tick).await?;
    h.runtime.handle_event(RuntimeEvent::Tick).await?;

    assert_eq!(h.rendered().len(), 1);
    assert_eq!(h.runtime.core().state().last_modified(), at(102));
    assert_eq!(h.status.lines(), vec!["102.000000".to_string()]);
    Ok(())
}

#[tokio::test]
async fn each_separate_change_renders() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100)).build();

    for t in [101, 105, 107] {
        h.fs.touch("report.qmd", at(t));
        h.runtime.handle_event(RuntimeEvent::Tick).await?;
        h.runtime.handle_event(RuntimeEvent::Tick).await?;
    }

    assert_eq!(h.rendered().len(), 3);
    assert_eq!(
        h.status.lines(),
        vec!["101.000000", "105.000000", "107.000000"]
    );
    Ok(())
}

#[tokio::test]
async fn failed_render_does_not_stop_the_loop() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100))
        .render_outcome(RenderOutcome::Failed(1))
        .build();

    h.fs.touch("report.qmd", at(101));
    assert!(h.runtime.handle_event(RuntimeEvent::Tick).await?);
    h.fs.touch("report.qmd", at(102));
    assert!(h.runtime.handle_event(RuntimeEvent::Tick).await?);

    assert_eq!(h.rendered().len(), 2);
    assert_eq!(h.runtime.core().state().last_modified(), at(102));
    Ok(())
}

#[tokio::test]
async fn filesystem_event_renders_only_on_real_change() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100)).build();
    let event = || RuntimeEvent::FsEvent {
        path: PathBuf::from("report.qmd"),
    };

    // A save typically produces several notifications for one mtime.
    h.fs.touch("report.qmd", at(101));
    for _ in 0..4 {
        h.runtime.handle_event(event()).await?;
    }

    assert_eq!(h.rendered().len(), 1);
    Ok(())
}

#[tokio::test]
async fn deleted_target_is_fatal() -> TestResult {
    init_tracing();
    let mut h = HarnessBuilder::new("report.qmd", at(100)).build();

    h.fs.remove("report.qmd");
    match h.runtime.handle_event(RuntimeEvent::Tick).await {
        Err(QmdWatchError::TargetMissing(p)) => assert_eq!(p, PathBuf::from("report.qmd")),
        other => panic!("expected TargetMissing, got {other:?}"),
    }
    assert!(h.rendered().is_empty());
    Ok(())
}

#[tokio::test]
async fn run_renders_once_then_stops_on_shutdown() -> TestResult {
    init_tracing();
    let h = HarnessBuilder::new("report.qmd", at(100)).build();

    h.fs.touch("report.qmd", at(102));
    for _ in 0..3 {
        h.tx.send(RuntimeEvent::Tick).await?;
    }
    h.tx.send(RuntimeEvent::ShutdownRequested).await?;
    // Anything after shutdown must not be processed.
    h.tx.send(RuntimeEvent::Tick).await?;

    let rendered = h.rendered.clone();
    let status = h.status.clone();

    match timeout(Duration::from_secs(3), h.runtime.run()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(e.into()),
        Err(_) => panic!("runtime did not finish within 3 seconds"),
    }

    assert_eq!(rendered.lock().unwrap().len(), 1);
    assert_eq!(status.lines(), vec!["102.000000".to_string()]);
    Ok(())
}

#[tokio::test]
async fn run_exits_when_all_senders_are_gone() -> TestResult {
    init_tracing();
    let h = HarnessBuilder::new("report.qmd", at(100)).build();

    h.tx.send(RuntimeEvent::Tick).await?;
    drop(h.tx);

    match timeout(Duration::from_secs(3), h.runtime.run()).await {
        Ok(result) => result?,
        Err(_) => panic!("runtime did not finish within 3 seconds"),
    }
    Ok(())
}

#[tokio::test]
async fn run_propagates_missing_target() -> TestResult {
    init_tracing();
    let h = HarnessBuilder::new("report.qmd", at(100)).build();

    h.fs.remove("report.qmd");
    h.tx.send(RuntimeEvent::Tick).await?;

    let result = timeout(Duration::from_secs(3), h.runtime.run()).await?;
    assert!(matches!(result, Err(QmdWatchError::TargetMissing(_))));
    Ok(())
}
