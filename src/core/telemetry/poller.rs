//! Repeating telemetry poll task.

use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::core::runtime::AppEvent;

use super::Sampler;

/// Task that samples CPU, RAM and top processes on a fixed interval.
///
/// Ticks never overlap: if a sample is still running when the next tick
/// is due, that tick is skipped rather than queued. The task ends when
/// the shutdown signal fires or the UI side drops its receiver; an
/// in-flight sample simply completes and its result is discarded.
pub async fn telemetry_task(
    mut sampler: Sampler,
    interval_ms: u64,
    update_tx: mpsc::Sender<AppEvent>,
    mut shutdown: broadcast::Receiver<()>,
) {
    log::debug!("telemetry task started ({}ms interval)", interval_ms);

    // First CPU reading is meaningless until sysinfo has two measurements
    tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
    sampler.sample();

    let mut ticker = interval(Duration::from_millis(interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = sampler.sample();
                if update_tx.send(AppEvent::Telemetry(snapshot)).await.is_err() {
                    break;
                }
            }
            _ = shutdown.recv() => {
                log::debug!("telemetry task shutting down");
                break;
            }
        }
    }
}
