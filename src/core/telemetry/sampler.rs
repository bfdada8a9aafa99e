use sysinfo::{CpuRefreshKind, MemoryRefreshKind, ProcessRefreshKind, RefreshKind, System};

use super::{aggregate_top_processes, SystemSnapshot};

/// Samples instantaneous CPU/RAM usage and per-process resident memory.
///
/// Owns the sysinfo::System instance; each call to [`Sampler::sample`]
/// refreshes it and builds a fresh [`SystemSnapshot`]. Processes that
/// vanished or denied access are simply absent from the refreshed list,
/// so enumeration never fails.
pub struct Sampler {
    system: System,
    top_count: usize,
}

impl Sampler {
    pub fn new(top_count: usize) -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything())
            .with_processes(ProcessRefreshKind::nothing().with_memory());

        Self {
            system: System::new_with_specifics(refresh_kind),
            top_count,
        }
    }

    pub fn sample(&mut self) -> SystemSnapshot {
        self.system.refresh_all();

        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let ram_percent = if total > 0 {
            (used as f32 / total as f32) * 100.0
        } else {
            0.0
        };

        let entries = self
            .system
            .processes()
            .values()
            .map(|proc| (proc.name().to_string_lossy().to_string(), proc.memory()));

        SystemSnapshot {
            cpu_percent: self.system.global_cpu_usage().clamp(0.0, 100.0),
            ram_percent: ram_percent.clamp(0.0, 100.0),
            top_processes: aggregate_top_processes(entries, self.top_count),
        }
    }
}
