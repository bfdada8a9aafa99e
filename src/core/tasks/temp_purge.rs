//! Temporary files purge task.
//!
//! Deletes everything directly under the OS temp directory. Entries
//! that cannot be removed (in use, permission denied) are skipped;
//! failures are isolated per top-level entry so a locked file never
//! aborts the rest of the sweep.

use std::fs;
use std::path::Path;

use crate::platform::temp_root;

use super::TaskOutcome;

/// Statistics from a purge run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PurgeStats {
    pub removed: usize,
    pub failed: usize,
}

/// Remove every top-level entry under `root`.
///
/// Files and symlinks are unlinked, directories are deleted recursively.
/// With `dry_run` set, entries are counted but nothing is touched.
pub fn purge_temp(root: &Path, dry_run: bool) -> PurgeStats {
    let mut stats = PurgeStats::default();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot read temp directory {:?}: {}", root, e);
            return stats;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // file_type() does not follow symlinks, so a link to a directory
        // is unlinked rather than recursed into.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if dry_run {
            stats.removed += 1;
            continue;
        }

        let result = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        match result {
            Ok(()) => stats.removed += 1,
            Err(e) => {
                log::debug!("skipping {:?}: {}", path, e);
                stats.failed += 1;
            }
        }
    }

    stats
}

/// Blocking task entry point: purge the OS temp directory and report.
pub fn run() -> TaskOutcome {
    let root = temp_root();
    let stats = purge_temp(&root, false);

    TaskOutcome::success(format!(
        "Temp cleanup complete. {} entries removed.",
        stats.removed
    ))
}
