//! Layered environment file loading.
//!
//! Candidate files are consulted in priority order. A key bound by a
//! higher-priority file is never overwritten by a lower-priority one,
//! and the process environment outranks every file. Missing files are
//! skipped without error.

use std::collections::BTreeMap;
use std::path::Path;

/// Env files in priority order, highest first.
pub const ENV_FILES: &[&str] = &[".env.local", ".env.development", ".env.test", ".env"];

/// Merge the env files found under `dir` into a single map.
///
/// First match wins: once a key is bound by one file, later files do
/// not change it. Files that are missing or unreadable contribute
/// nothing.
pub fn merge_env_files(dir: &Path) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    for name in ENV_FILES {
        let path = dir.join(name);
        let entries = match dotenvy::from_path_iter(&path) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        let mut loaded = 0usize;
        for (key, value) in entries.flatten() {
            merged.entry(key).or_insert(value);
            loaded += 1;
        }

        tracing::debug!(file = %name, keys = loaded, "loaded environment file");
    }

    merged
}

/// Load env files under `dir` into the process environment.
///
/// Variables already present in the environment are left untouched.
pub fn load_env_files(dir: &Path) {
    for (key, value) in merge_env_files(dir) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_local_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env.local"), "SHARED_KEY=local\n").unwrap();
        fs::write(
            dir.path().join(".env"),
            "SHARED_KEY=default\nONLY_DEFAULT=yes\n",
        )
        .unwrap();

        let merged = merge_env_files(dir.path());
        assert_eq!(merged.get("SHARED_KEY").map(String::as_str), Some("local"));
        assert_eq!(merged.get("ONLY_DEFAULT").map(String::as_str), Some("yes"));
    }

    #[test]
    fn test_default_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "A=1\nB=2\n").unwrap();

        let merged = merge_env_files(dir.path());
        assert_eq!(merged.get("A").map(String::as_str), Some("1"));
        assert_eq!(merged.get("B").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(merge_env_files(dir.path()).is_empty());
    }

    #[test]
    fn test_priority_order_across_all_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env.development"), "K=dev\n").unwrap();
        fs::write(dir.path().join(".env.test"), "K=test\n").unwrap();
        fs::write(dir.path().join(".env"), "K=default\n").unwrap();

        let merged = merge_env_files(dir.path());
        assert_eq!(merged.get("K").map(String::as_str), Some("dev"));
    }

    #[test]
    fn test_load_does_not_clobber_process_env() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "CHAINOPS_ENV_TEST_KEY=from_file\n").unwrap();

        std::env::set_var("CHAINOPS_ENV_TEST_KEY", "from_process");
        load_env_files(dir.path());
        assert_eq!(
            std::env::var("CHAINOPS_ENV_TEST_KEY").unwrap(),
            "from_process"
        );
        std::env::remove_var("CHAINOPS_ENV_TEST_KEY");
    }
}
