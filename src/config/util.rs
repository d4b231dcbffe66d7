//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/app/tools/icons/   ← start
/// /home/user/app/pwa-tools.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Display name for a project: the final component of its root directory.
pub fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("tools/generate-icons");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("pwa-tools.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("pwa-tools.toml")).unwrap();
        assert_eq!(found, dir.path().join("pwa-tools.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("pwa-tools-test-does-not-exist.toml");
        assert!(find_config_file(dir.path(), name).is_none());
    }

    #[test]
    fn test_directory_with_config_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("odd.toml")).unwrap();
        assert!(find_config_file(dir.path(), Path::new("odd.toml")).is_none());
    }

    #[test]
    fn test_project_name() {
        assert_eq!(project_name(Path::new("/home/user/nrd-rrhh")), "nrd-rrhh");
        assert_eq!(project_name(Path::new("/")), "/");
    }
}
