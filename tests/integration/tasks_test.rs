use std::fs;

use systune::core::tasks::dns_flush::flush_with;
use systune::core::tasks::{purge_temp, PurgeStats};
use tempfile::TempDir;

#[test]
fn test_purge_counts_top_level_entries() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("report.tmp"), b"x").unwrap();
    fs::write(dir.path().join("download.partial"), b"x").unwrap();

    let cache = dir.path().join("app-cache");
    fs::create_dir(&cache).unwrap();
    fs::write(cache.join("blob1"), b"x").unwrap();
    fs::write(cache.join("blob2"), b"x").unwrap();

    let stats = purge_temp(dir.path(), false);

    // Two files plus one directory tree = three entries
    assert_eq!(stats, PurgeStats { removed: 3, failed: 0 });
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_purge_skips_denied_entries_and_keeps_going() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    for name in ["a.tmp", "b.tmp", "c.tmp"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("held-open"), b"x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores permission bits; the denied entry cannot be staged then
    if fs::write(locked.join("canary"), b"x").is_ok() {
        fs::remove_file(locked.join("canary")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let stats = purge_temp(dir.path(), false);

    assert_eq!(stats.removed, 3);
    assert_eq!(stats.failed, 1);
    assert!(locked.join("held-open").exists());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_dns_flush_unsupported_platform_never_executes() {
    let outcome = flush_with(None);

    assert!(!outcome.is_success());
    assert!(outcome.message.contains("not supported on this platform"));
}

#[cfg(unix)]
#[test]
fn test_dns_flush_failure_carries_remediation_hint() {
    let outcome = flush_with(Some(std::process::Command::new("false")));

    assert!(!outcome.is_success());
    assert!(outcome.message.contains("elevated privileges"));
}
