//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path or an explicit path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// The breakpoint table is commented out so the built-in one applies.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Fleet Dashboard Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/fleet-dashboard/config.toml

# ==============================================================================
# Layout
# ==============================================================================

[layout]

# Key the dashboard arrangement is saved under.
# Different keys keep independent arrangements (e.g. one per site).
storage_key = "dashboard-layout"

# Directory for saved layouts. Empty string means
# $XDG_DATA_HOME/fleet-dashboard/layouts. Tilde (~) is expanded.
storage_dir = ""

# Whether the layout can be unlocked for editing at all.
# Set to false for wall displays that must never change.
editable = true

# ==============================================================================
# Grid geometry (pixels)
# ==============================================================================

[grid]

# Height of one grid row.
row_height = 80

# [horizontal, vertical] gap between panels.
margin = [16, 16]

# [horizontal, vertical] padding inside the grid container.
container_padding = [0, 0]

# ==============================================================================
# Viewport
# ==============================================================================

[viewport]

# Quiet period after the last width change before the breakpoint is
# re-evaluated, for programs that embed the dashboard and track live window
# resizes. fleetdash only validates it. Examples: "100ms", "150ms", "1s"
resize_debounce = "150ms"

# Width assumed by the command line when --width is not given.
default_width = 1280

# ==============================================================================
# Breakpoints
# ==============================================================================

# Custom breakpoint table, widest first. The narrowest entry must start
# at zero width. Leave commented out to use the built-in table below.
#
# [[breakpoints]]
# name = "lg"
# min_width = 1200
# columns = 12
#
# [[breakpoints]]
# name = "md"
# min_width = 996
# columns = 12
#
# [[breakpoints]]
# name = "sm"
# min_width = 768
# columns = 6
#
# [[breakpoints]]
# name = "xs"
# min_width = 480
# columns = 4
#
# [[breakpoints]]
# name = "xxs"
# min_width = 0
# columns = 2

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Verbosity when FLEETDASH_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
log_level = "info"
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates the default config file at the XDG path if it does not exist.
///
/// Returns `Ok(true)` if the file was created, `Ok(false)` if it already exists.
pub fn create_default_config_if_missing() -> Result<bool, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        return Ok(false);
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(true)
}

/// Creates (or force-overwrites) the default config file at the XDG path.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_default_config_at(&path, force)?;
    Ok(path)
}

/// Creates (or force-overwrites) the default config file at `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)
}

/// Writes the template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
