//! DNS cache flush task.
//!
//! The flush command is platform-conditional. When no command exists on
//! the running system the task reports Failure without executing
//! anything; a nonzero exit surfaces as Failure with a remediation hint
//! instead of a raw OS error.

use std::process::Command;

use crate::platform::dns::flush_command;

use super::TaskOutcome;

/// Blocking task entry point: flush the OS DNS resolver cache.
pub fn run() -> TaskOutcome {
    flush_with(flush_command())
}

/// Run the given flush command, or report the capability as unsupported
/// when there is none.
pub fn flush_with(command: Option<Command>) -> TaskOutcome {
    let mut command = match command {
        Some(cmd) => cmd,
        None => {
            return TaskOutcome::failure(
                "DNS cache flush is not supported on this platform.",
            )
        }
    };

    match command.output() {
        Ok(output) if output.status.success() => {
            TaskOutcome::success("DNS cache flushed successfully.")
        }
        Ok(output) => {
            let detail = String::from_utf8_lossy(&output.stderr);
            let detail = detail.trim();
            log::debug!("dns flush exited with {}: {}", output.status, detail);
            TaskOutcome::failure(
                "Could not flush the DNS cache. Try running with elevated privileges.",
            )
        }
        Err(e) => {
            log::debug!("dns flush command failed to start: {}", e);
            TaskOutcome::failure(
                "Could not flush the DNS cache. Try running with elevated privileges.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_reports_failure_without_running() {
        let outcome = flush_with(None);
        assert!(!outcome.is_success());
        assert!(outcome.message.contains("not supported on this platform"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_reports_failure_with_hint() {
        let outcome = flush_with(Some(Command::new("false")));
        assert!(!outcome.is_success());
        assert!(outcome.message.contains("elevated privileges"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_reports_success() {
        let outcome = flush_with(Some(Command::new("true")));
        assert!(outcome.is_success());
    }
}
