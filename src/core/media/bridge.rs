//! Media session polling loop.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::core::runtime::AppEvent;

use super::{MediaStateMachine, MediaTransport};

/// Task that polls the media transport and forwards state transitions.
///
/// Only spawned when the transport capability was resolved at startup.
/// The query shells out to the platform helper, so each poll runs on
/// the blocking pool; a failed query counts as "no update this tick".
pub async fn media_task(
    transport: Arc<dyn MediaTransport>,
    interval_ms: u64,
    update_tx: mpsc::Sender<AppEvent>,
    mut shutdown: broadcast::Receiver<()>,
) {
    log::debug!("media poll task started ({}ms interval)", interval_ms);

    let mut machine = MediaStateMachine::new();

    let mut ticker = interval(Duration::from_millis(interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let t = Arc::clone(&transport);
                let props = match tokio::task::spawn_blocking(move || t.current_session()).await {
                    Ok(props) => props,
                    Err(e) => {
                        log::debug!("media query worker failed: {}", e);
                        continue;
                    }
                };

                if let Some(state) = machine.observe(props) {
                    if update_tx.send(AppEvent::Media(state)).await.is_err() {
                        break;
                    }
                }
            }
            _ = shutdown.recv() => {
                log::debug!("media poll task shutting down");
                break;
            }
        }
    }
}
