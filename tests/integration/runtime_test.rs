use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use systune::core::media::{MediaCommand, MediaProps, MediaTransport};
use systune::core::runtime::{AppEvent, AppRuntime, RuntimeOptions};
use systune::core::tasks::{TaskKind, TaskOutcome};

/// Options that keep the telemetry poller effectively silent so tests
/// can focus on task and media delivery.
fn quiet_options() -> RuntimeOptions {
    RuntimeOptions {
        poll_interval_ms: 60_000,
        media_interval_ms: 60_000,
        top_processes: 1,
    }
}

/// Drain events for `budget`, returning only task outcomes.
fn collect_task_events(rt: &mut AppRuntime, budget: Duration) -> Vec<(TaskKind, TaskOutcome)> {
    let deadline = Instant::now() + budget;
    let mut out = Vec::new();

    while Instant::now() < deadline {
        if let Some(event) = rt.next_event_timeout(Duration::from_millis(50)) {
            if let AppEvent::Task { kind, outcome } = event {
                out.push((kind, outcome));
            }
        }
    }

    out
}

#[test]
fn test_exactly_one_outcome_per_submission() {
    let mut rt = AppRuntime::new(quiet_options(), None).unwrap();

    rt.submit_with(TaskKind::DnsFlush, || TaskOutcome::success("done"));

    let outcomes = collect_task_events(&mut rt, Duration::from_millis(700));
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].0, TaskKind::DnsFlush);
    assert!(outcomes[0].1.is_success());

    rt.shutdown();
}

#[test]
fn test_panicking_worker_still_yields_one_failure() {
    let mut rt = AppRuntime::new(quiet_options(), None).unwrap();

    rt.submit_with(TaskKind::TempPurge, || panic!("worker exploded"));

    let outcomes = collect_task_events(&mut rt, Duration::from_millis(700));
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].1.is_success());

    rt.shutdown();
}

#[test]
fn test_every_submission_is_answered() {
    let mut rt = AppRuntime::new(quiet_options(), None).unwrap();

    for i in 0..5 {
        rt.submit_with(TaskKind::DnsFlush, move || {
            TaskOutcome::success(format!("run {}", i))
        });
    }

    let outcomes = collect_task_events(&mut rt, Duration::from_secs(1));
    assert_eq!(outcomes.len(), 5);

    rt.shutdown();
}

struct ScriptedTransport {
    props: MediaProps,
    commands: Arc<AtomicUsize>,
}

impl MediaTransport for ScriptedTransport {
    fn current_session(&self) -> Option<MediaProps> {
        Some(self.props.clone())
    }

    fn send(&self, _command: MediaCommand) {
        self.commands.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_unchanged_media_state_is_forwarded_once() {
    let commands = Arc::new(AtomicUsize::new(0));
    let transport = Arc::new(ScriptedTransport {
        props: MediaProps {
            artist: "Nina Simone".to_string(),
            title: "Sinnerman".to_string(),
            is_playing: true,
        },
        commands: Arc::clone(&commands),
    });

    let options = RuntimeOptions {
        poll_interval_ms: 60_000,
        media_interval_ms: 40,
        top_processes: 1,
    };
    let mut rt = AppRuntime::new(options, Some(transport)).unwrap();

    // Many poll ticks happen in this window, all observing the same state
    let deadline = Instant::now() + Duration::from_millis(600);
    let mut media_events = 0;
    while Instant::now() < deadline {
        if let Some(AppEvent::Media(state)) = rt.next_event_timeout(Duration::from_millis(50)) {
            assert_eq!(state.title, "Sinnerman");
            assert!(state.is_playing);
            media_events += 1;
        }
    }

    assert_eq!(media_events, 1);
    rt.shutdown();
}

#[test]
fn test_media_commands_reach_the_transport() {
    let commands = Arc::new(AtomicUsize::new(0));
    let transport = Arc::new(ScriptedTransport {
        props: MediaProps {
            artist: String::new(),
            title: String::new(),
            is_playing: false,
        },
        commands: Arc::clone(&commands),
    });

    let rt = AppRuntime::new(quiet_options(), Some(transport)).unwrap();
    assert!(rt.media_available());

    rt.media_command(MediaCommand::PlayPause);
    rt.media_command(MediaCommand::Next);

    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(commands.load(Ordering::SeqCst), 2);

    rt.shutdown();
}

#[test]
fn test_media_command_without_transport_is_a_noop() {
    let rt = AppRuntime::new(quiet_options(), None).unwrap();
    assert!(!rt.media_available());

    // must not panic
    rt.media_command(MediaCommand::Previous);

    rt.shutdown();
}
