//! Platform-aware path resolution for fleet-dashboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/fleet-dashboard` or `~/.config/fleet-dashboard`
//! - Data: `$XDG_DATA_HOME/fleet-dashboard` or `~/.local/share/fleet-dashboard`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config and data: `~/Library/Application Support/fleet-dashboard`
//!
//! When no home directory can be determined the current directory is used.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "fleet-dashboard";

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/fleet-dashboard` (if env var set, any platform)
/// 2. Platform default
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(home_dir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".config")
    }
}

/// Returns the path to the main configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/fleet-dashboard` (if env var set, any platform)
/// 2. Platform default
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().unwrap_or_else(home_dir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".local/share")
    }
}

/// Directory holding saved layouts: `data_dir()/layouts`.
pub fn layouts_dir() -> PathBuf {
    data_dir().join("layouts")
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serial_test::serial;

    /// Runs `f` with env vars temporarily set, then restores them.
    pub(crate) fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        f();

        for (k, original) in &originals {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/fleet-dashboard/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_path_without_xdg_uses_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = platform_config_dir().join("fleet-dashboard/config.toml");
            assert_eq!(config_path(), expected);
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn test_linux_data_default_is_local_share() {
        with_env(&[("XDG_DATA_HOME", None)], || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(data_dir(), home.join(".local/share/fleet-dashboard"));
        });
    }

    #[test]
    #[serial]
    fn test_layouts_dir_with_xdg_override() {
        with_env(&[("XDG_DATA_HOME", Some("/srv/data"))], || {
            assert_eq!(
                layouts_dir(),
                PathBuf::from("/srv/data/fleet-dashboard/layouts")
            );
        });
    }

    #[test]
    fn test_expand_tilde_with_home_prefix() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~/layouts"), home.join("layouts"));
    }

    #[test]
    fn test_expand_tilde_bare_tilde() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~"), home);
    }

    #[test]
    fn test_expand_tilde_leaves_other_paths() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
        assert_eq!(expand_tilde("~other/x"), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_ensure_dir_creates_directory() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
        ensure_dir(&nested).expect("second call is a no-op");
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_dir_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("secure");
        ensure_dir(&dir).expect("ensure_dir failed");
        let mode = fs::metadata(&dir)
            .expect("failed to read metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
