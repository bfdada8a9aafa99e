//! Live system telemetry: instantaneous CPU/RAM usage and the ranked
//! list of top memory-consuming processes.

mod poller;
mod sampler;

pub use poller::telemetry_task;
pub use sampler::Sampler;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_TOP_PROCESSES: usize = 5;

/// One poll cycle's worth of telemetry. Recomputed every tick, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSnapshot {
    /// Global CPU utilization, 0..=100
    pub cpu_percent: f32,
    /// RAM utilization, 0..=100
    pub ram_percent: f32,
    /// (process name, aggregated resident bytes), descending, deduplicated by name
    pub top_processes: Vec<(String, u64)>,
}

/// Aggregate per-process resident memory by process name, sort descending
/// by aggregated bytes and truncate to `count`.
///
/// Multiple instances of the same executable are summed under one entry.
/// Ties keep the first-seen order of the input (the sort is stable).
pub fn aggregate_top_processes<I>(entries: I, count: usize) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for (name, rss) in entries {
        match index.get(&name) {
            Some(&i) => order[i].1 += rss,
            None => {
                index.insert(name.clone(), order.len());
                order.push((name, rss));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(count);
    order
}
