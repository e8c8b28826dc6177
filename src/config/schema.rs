//! TOML configuration schema types for the fleet dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial (or empty) file is valid.
//!
//! Duration fields use human-readable strings (e.g. `"150ms"`) parsed by the
//! `humantime` crate at the call site.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::config::error::ConfigError;
use crate::config::xdg;
use crate::error::BreakpointError;
use crate::grid::GridMetrics;
use crate::layout::DEFAULT_STORAGE_KEY;
use crate::viewport::ResizeDebouncer;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [layout]
/// [grid]
/// [viewport]
/// [[breakpoints]]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Layout storage and editing settings.
    pub layout: LayoutConfig,
    /// Grid geometry in pixels.
    pub grid: GridConfig,
    /// Viewport handling.
    pub viewport: ViewportConfig,
    /// Custom breakpoint table, widest first. Empty means the built-in table.
    pub breakpoints: Vec<Breakpoint>,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// The configured breakpoint table, or the built-in one when none is set.
    pub fn breakpoint_table(&self) -> Result<BreakpointTable, BreakpointError> {
        if self.breakpoints.is_empty() {
            Ok(BreakpointTable::default())
        } else {
            BreakpointTable::new(self.breakpoints.clone())
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where layouts are stored and whether they can be edited.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Key the dashboard layout is saved under.
    pub storage_key: String,
    /// Directory for layout files. Empty string means the XDG data directory.
    /// Tilde (`~`) is expanded.
    pub storage_dir: String,
    /// Whether edit mode can be unlocked at all.
    pub editable: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: String::new(),
            editable: true,
        }
    }
}

impl LayoutConfig {
    /// Resolved storage directory.
    pub fn storage_dir(&self) -> PathBuf {
        if self.storage_dir.is_empty() {
            xdg::layouts_dir()
        } else {
            xdg::expand_tilde(&self.storage_dir)
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Pixel geometry of the grid container.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Height of one row in pixels.
    pub row_height: u32,
    /// `[horizontal, vertical]` gap between panels.
    pub margin: [u32; 2],
    /// `[horizontal, vertical]` padding inside the container.
    pub container_padding: [u32; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        let metrics = GridMetrics::default();
        Self {
            row_height: metrics.row_height,
            margin: metrics.margin,
            container_padding: metrics.container_padding,
        }
    }
}

impl From<&GridConfig> for GridMetrics {
    fn from(config: &GridConfig) -> Self {
        Self {
            row_height: config.row_height,
            margin: config.margin,
            container_padding: config.container_padding,
        }
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Viewport handling.
///
/// `resize_debounce` is for programs that embed the dashboard and feed it
/// live window widths: build a [`ResizeDebouncer`] with
/// [`ViewportConfig::debouncer`] and pass each delivered width to
/// `Dashboard::set_viewport_width`. The `fleetdash` binary works on a single
/// width per invocation, so it only validates the value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Quiet period before a resize is acted on (e.g. `"150ms"`).
    pub resize_debounce: String,
    /// Width in pixels assumed when none is given on the command line.
    pub default_width: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            resize_debounce: "150ms".to_string(),
            default_width: 1280,
        }
    }
}

impl ViewportConfig {
    /// Parses `resize_debounce`.
    pub fn resize_debounce(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.resize_debounce).map_err(|e| ConfigError::InvalidDuration {
            field: "viewport.resize_debounce".to_string(),
            value: self.resize_debounce.clone(),
            message: e.to_string(),
        })
    }

    /// A debouncer with the configured quiet period.
    pub fn debouncer(&self) -> Result<ResizeDebouncer, ConfigError> {
        self.resize_debounce().map(ResizeDebouncer::new)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity used when `FLEETDASH_LOG` is not set.
    pub log_level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
