//! Background optimization tasks.
//!
//! Each task is a blocking operation executed off the UI thread by the
//! app runtime. A task always produces exactly one [`TaskOutcome`],
//! whatever happens underneath.

pub mod dns_flush;
pub mod temp_purge;

pub use temp_purge::{purge_temp, PurgeStats};

/// Identity of a background task, used to route its outcome back to the
/// UI control that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    TempPurge,
    DnsFlush,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::TempPurge => "Temp cleanup",
            TaskKind::DnsFlush => "DNS flush",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Terminal result of one background task execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl TaskOutcome {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            kind: OutcomeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Execute a task to completion on the current thread.
///
/// This is the blocking entry point the runtime hands to its worker
/// pool. It never panics for OS-level failures; those surface as
/// Failure outcomes.
pub fn run_task(kind: TaskKind) -> TaskOutcome {
    match kind {
        TaskKind::TempPurge => temp_purge::run(),
        TaskKind::DnsFlush => dns_flush::run(),
    }
}
