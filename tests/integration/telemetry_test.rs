use std::time::{Duration, Instant};

use systune::core::runtime::{AppEvent, AppRuntime, RuntimeOptions};
use systune::core::telemetry::aggregate_top_processes;

const MB: u64 = 1024 * 1024;

#[test]
fn test_aggregation_merges_duplicate_executables() {
    // chrome.exe appears twice and consolidates before ranking
    let entries = vec![
        ("chrome.exe".to_string(), 100 * MB),
        ("chrome.exe".to_string(), 50 * MB),
        ("notes.exe".to_string(), 10 * MB),
    ];

    let top = aggregate_top_processes(entries, 2);
    assert_eq!(
        top,
        vec![
            ("chrome.exe".to_string(), 150 * MB),
            ("notes.exe".to_string(), 10 * MB),
        ]
    );
}

#[test]
fn test_aggregation_caps_length_at_count() {
    let many: Vec<_> = (0..20).map(|i| (format!("proc{}", i), i as u64)).collect();
    assert_eq!(aggregate_top_processes(many, 5).len(), 5);

    let few = vec![("lonely".to_string(), 1)];
    assert_eq!(aggregate_top_processes(few, 5).len(), 1);
}

#[test]
fn test_poller_delivers_bounded_snapshots() {
    let options = RuntimeOptions {
        poll_interval_ms: 250,
        media_interval_ms: 60_000,
        top_processes: 4,
    };
    let mut rt = AppRuntime::new(options, None).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut snapshots = Vec::new();

    while Instant::now() < deadline && snapshots.len() < 2 {
        if let Some(AppEvent::Telemetry(snap)) = rt.next_event_timeout(Duration::from_millis(200))
        {
            snapshots.push(snap);
        }
    }

    assert!(!snapshots.is_empty(), "poller produced no snapshots");
    for snap in &snapshots {
        assert!((0.0..=100.0).contains(&snap.cpu_percent));
        assert!((0.0..=100.0).contains(&snap.ram_percent));
        assert!(snap.top_processes.len() <= 4);
        assert!(snap.top_processes.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    rt.shutdown();
}
