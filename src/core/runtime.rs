//! Tokio runtime and event plumbing for the application.
//!
//! One single-threaded UI loop owns all presentation state; everything
//! blocking (telemetry sampling, media queries, optimization tasks)
//! runs on this runtime and reports back through a single mpsc channel.
//! Delivery is FIFO per source; there is no ordering guarantee across
//! sources.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::time::Duration;

use crate::core::media::{media_task, MediaCommand, MediaState, MediaTransport};
use crate::core::tasks::{run_task, TaskKind, TaskOutcome};
use crate::core::telemetry::{telemetry_task, Sampler, SystemSnapshot};
use crate::error::Result;

/// Events delivered from background workers to the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Fresh telemetry snapshot from the poller
    Telemetry(SystemSnapshot),

    /// Media session transition (only emitted on change)
    Media(MediaState),

    /// Terminal outcome of a submitted background task
    Task { kind: TaskKind, outcome: TaskOutcome },
}

/// Knobs for the background workers.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    pub poll_interval_ms: u64,
    pub media_interval_ms: u64,
    pub top_processes: usize,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: crate::core::telemetry::DEFAULT_POLL_INTERVAL_MS,
            media_interval_ms: 2000,
            top_processes: crate::core::telemetry::DEFAULT_TOP_PROCESSES,
        }
    }
}

/// Wrapper around the Tokio runtime hosting all background work.
pub struct AppRuntime {
    events_rx: mpsc::Receiver<AppEvent>,
    events_tx: mpsc::Sender<AppEvent>,
    shutdown_tx: broadcast::Sender<()>,
    media: Option<Arc<dyn MediaTransport>>,
    runtime: tokio::runtime::Runtime,
}

impl AppRuntime {
    /// Build the runtime and spawn the telemetry poller, plus the media
    /// poll loop when the transport capability is present.
    pub fn new(
        options: RuntimeOptions,
        media: Option<Arc<dyn MediaTransport>>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("systune-worker")
            .build()?;

        let (events_tx, events_rx) = mpsc::channel::<AppEvent>(32);
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        runtime.spawn(telemetry_task(
            Sampler::new(options.top_processes),
            options.poll_interval_ms,
            events_tx.clone(),
            shutdown_tx.subscribe(),
        ));

        if let Some(transport) = &media {
            runtime.spawn(media_task(
                Arc::clone(transport),
                options.media_interval_ms,
                events_tx.clone(),
                shutdown_tx.subscribe(),
            ));
        } else {
            log::info!("media transport not available, media bar disabled");
        }

        Ok(Self {
            events_rx,
            events_tx,
            shutdown_tx,
            media,
            runtime,
        })
    }

    /// Enqueue a background task. Exactly one `AppEvent::Task` comes
    /// back per submission, whatever the underlying operation does.
    pub fn submit(&self, kind: TaskKind) {
        self.submit_with(kind, move || run_task(kind));
    }

    /// Like [`AppRuntime::submit`] but with an explicit operation.
    pub fn submit_with<F>(&self, kind: TaskKind, op: F)
    where
        F: FnOnce() -> TaskOutcome + Send + 'static,
    {
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let outcome = match tokio::task::spawn_blocking(op).await {
                Ok(outcome) => outcome,
                // A panicking worker still yields its one outcome
                Err(e) => {
                    log::error!("{} worker aborted: {}", kind.label(), e);
                    TaskOutcome::failure(format!("{} failed unexpectedly.", kind.label()))
                }
            };
            let _ = tx.send(AppEvent::Task { kind, outcome }).await;
        });
    }

    /// Issue a fire-and-forget media transport command.
    pub fn media_command(&self, command: MediaCommand) {
        if let Some(transport) = &self.media {
            let transport = Arc::clone(transport);
            self.runtime.spawn_blocking(move || transport.send(command));
        }
    }

    pub fn media_available(&self) -> bool {
        self.media.is_some()
    }

    /// Non-blocking drain step for the UI loop.
    pub fn try_next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Block up to `timeout` for the next event.
    pub fn next_event_timeout(&mut self, timeout: Duration) -> Option<AppEvent> {
        let rx = &mut self.events_rx;
        self.runtime
            .block_on(async { tokio::time::timeout(timeout, rx.recv()).await.ok().flatten() })
    }

    /// Stop future ticks. In-flight work completes and its late results
    /// are dropped with the channel.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        // Runtime shuts down when dropped
    }
}
