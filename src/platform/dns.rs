//! Platform-conditional DNS cache flush command.

use std::process::Command;

/// Resolve the DNS flush command for the running platform.
///
/// Returns `None` when no flush mechanism exists here; callers report
/// that as an unsupported capability instead of attempting anything.
pub fn flush_command() -> Option<Command> {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("ipconfig");
        cmd.arg("/flushdns");
        Some(cmd)
    }

    #[cfg(unix)]
    {
        // systemd-resolved is the only resolver cache we know how to
        // flush portably; without it the capability is absent.
        let resolvectl = which::which("resolvectl").ok()?;
        let mut cmd = Command::new(resolvectl);
        cmd.arg("flush-caches");
        Some(cmd)
    }

    #[cfg(not(any(windows, unix)))]
    {
        None
    }
}
