// Platform-specific temporary directory detection
use std::path::PathBuf;

/// Root of the OS temporary directory for the current user.
///
/// Honors TMPDIR on Unix and TEMP/TMP on Windows, falling back to the
/// platform default (/tmp, %LOCALAPPDATA%\Temp).
pub fn temp_root() -> PathBuf {
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_root_exists() {
        assert!(temp_root().is_dir());
    }
}
