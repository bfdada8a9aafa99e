use anyhow::Result;

use crate::core::runtime::{AppRuntime, RuntimeOptions};
use crate::core::ConfigStore;
use crate::platform::{detect_media_transport, detect_volume_control, HardwareInfo};
use crate::ui::dashboard::run_dashboard;

/// Launch the dashboard. `matches` is `None` when invoked without a
/// subcommand, in which case all options keep their defaults.
pub fn execute(matches: Option<&clap::ArgMatches>) -> Result<()> {
    let mut options = RuntimeOptions::default();
    if let Some(matches) = matches {
        if let Some(interval) = matches.get_one::<u64>("interval") {
            options.poll_interval_ms = (*interval).max(250);
        }
        if let Some(top) = matches.get_one::<usize>("top") {
            options.top_processes = (*top).max(1);
        }
    }

    // Resolve optional capabilities once, up front
    let media = detect_media_transport();
    let volume = detect_volume_control();

    let config = ConfigStore::load();
    let hardware = HardwareInfo::detect();
    let runtime = AppRuntime::new(options, media)?;

    run_dashboard(runtime, config, hardware, volume)
}
