//! Static hardware identity, queried once at startup.
//!
//! Detailed CPU/GPU names come from WMI on Windows; elsewhere the CPU
//! name falls back to the sysinfo brand string and the GPU reads as
//! unavailable. None of this is fatal: every lookup degrades to the
//! sentinel string.

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// Sentinel shown when a detailed hardware query path is unsupported.
pub const UNAVAILABLE: &str = "Not available";

/// Hardware identity, effectively static for the session.
#[derive(Debug, Clone)]
pub struct HardwareInfo {
    pub cpu_name: String,
    pub gpu_name: String,
    pub ram_total_bytes: u64,
}

impl HardwareInfo {
    pub fn detect() -> Self {
        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing())
            .with_memory(MemoryRefreshKind::everything());
        let sys = System::new_with_specifics(refresh);

        let (cpu_name, gpu_name) = detect_names(&sys);

        Self {
            cpu_name,
            gpu_name,
            ram_total_bytes: sys.total_memory(),
        }
    }
}

#[cfg(windows)]
fn detect_names(sys: &System) -> (String, String) {
    match wmi_names() {
        Ok(names) => names,
        Err(e) => {
            log::warn!("WMI hardware query failed: {}", e);
            (fallback_cpu_name(sys), UNAVAILABLE.to_string())
        }
    }
}

#[cfg(windows)]
fn wmi_names() -> crate::Result<(String, String)> {
    use crate::error::SystuneError;
    use serde::Deserialize;
    use wmi::WMIConnection;

    #[derive(Deserialize, Debug)]
    #[serde(rename = "Win32_Processor")]
    #[serde(rename_all = "PascalCase")]
    struct Win32Processor {
        name: Option<String>,
    }

    #[derive(Deserialize, Debug)]
    #[serde(rename = "Win32_VideoController")]
    #[serde(rename_all = "PascalCase")]
    struct Win32VideoController {
        name: Option<String>,
    }

    let wmi_con = WMIConnection::new()
        .map_err(|e| SystuneError::other(format!("Failed to connect to WMI: {}", e)))?;

    let processors: Vec<Win32Processor> = wmi_con
        .query()
        .map_err(|e| SystuneError::other(format!("WMI processor query failed: {}", e)))?;
    let controllers: Vec<Win32VideoController> = wmi_con
        .query()
        .map_err(|e| SystuneError::other(format!("WMI video controller query failed: {}", e)))?;

    let cpu = processors
        .first()
        .and_then(|p| p.name.as_deref())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string());
    let gpu = controllers
        .first()
        .and_then(|c| c.name.as_deref())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| UNAVAILABLE.to_string());

    Ok((cpu, gpu))
}

#[cfg(not(windows))]
fn detect_names(sys: &System) -> (String, String) {
    (fallback_cpu_name(sys), UNAVAILABLE.to_string())
}

fn fallback_cpu_name(sys: &System) -> String {
    // Brand string requires a CPU refresh we may not have done; probe a
    // dedicated instance only if the cheap path comes up empty.
    let brand = sys
        .cpus()
        .first()
        .map(|c| c.brand().trim().to_string())
        .unwrap_or_default();

    if !brand.is_empty() {
        return brand;
    }

    let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
    let probe = System::new_with_specifics(refresh);
    probe
        .cpus()
        .first()
        .map(|c| c.brand().trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}
