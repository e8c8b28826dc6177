//! Error types for the layout engine.
//!
//! Validation failures ([`LayoutError`]) are raised before any mutation is
//! attempted, so the layout they refer to is always left untouched. Storage
//! failures ([`PersistenceError`]) come only from writes: loading degrades to
//! the default layout instead of failing.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::error::ConfigError;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Layout validation error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Layout storage error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Invalid breakpoint table
    #[error(transparent)]
    Breakpoint(#[from] BreakpointError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Local validation failures for move/resize requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The panel is not in the registry or has no position in the layout.
    #[error("Unknown panel: {panel_id}")]
    UnknownPanel {
        /// Identifier that was requested.
        panel_id: String,
    },

    /// The panel is pinned and rejects drag/resize.
    #[error("Panel is locked: {panel_id}")]
    PanelLocked {
        /// Identifier of the locked panel.
        panel_id: String,
    },

    /// Layout mutations are only accepted while edit mode is unlocked.
    #[error("Edit mode is disabled; unlock the layout before rearranging panels")]
    EditModeDisabled,

    /// The breakpoint is missing from the table or from the layout.
    #[error("Unknown breakpoint: {name}")]
    UnknownBreakpoint {
        /// Breakpoint name that was requested.
        name: String,
    },

    /// A panel with the same identifier is already registered.
    #[error("Duplicate panel identifier: {panel_id}")]
    DuplicatePanel {
        /// Identifier registered twice.
        panel_id: String,
    },
}

/// Failures writing to (or clearing) the layout store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The backend refused the write because its capacity would be exceeded.
    #[error("Storage quota exceeded for key '{key}': {required} bytes needed, {quota} bytes allowed")]
    QuotaExceeded {
        /// Storage key being written.
        key: String,
        /// Total bytes the store would hold after the write.
        required: usize,
        /// Configured capacity in bytes.
        quota: usize,
    },

    /// I/O failure on a file-backed store.
    #[error("Failed to access layout storage for key '{key}': {path}")]
    Io {
        /// Storage key being accessed.
        key: String,
        /// File involved in the failure.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The temp file was written but could not be moved into place.
    #[error("Failed to write layout atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Final path of the layout file.
        path: PathBuf,
        /// Temporary copy left behind.
        temp_path: PathBuf,
    },

    /// The layout could not be serialized.
    #[error("Failed to serialize layout for key '{key}': {message}")]
    Serialize {
        /// Storage key being written.
        key: String,
        /// Serializer message.
        message: String,
    },

    /// The key contains characters that cannot be used as a storage name.
    #[error("Invalid storage key '{key}': use letters, digits, '.', '_' or '-' and do not start with '.'")]
    InvalidKey {
        /// Rejected key.
        key: String,
    },
}

/// Problems with a breakpoint table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// The table has no entries.
    #[error("Breakpoint table is empty")]
    Empty,

    /// Two entries share a name.
    #[error("Duplicate breakpoint name: {0}")]
    DuplicateName(String),

    /// Entries are not sorted by strictly descending minimum width.
    #[error("Breakpoint '{name}' (min width {min_width}) must be narrower than the preceding breakpoint (min width {previous})")]
    NotDescending {
        /// Offending breakpoint.
        name: String,
        /// Its minimum width.
        min_width: u32,
        /// Minimum width of the entry before it.
        previous: u32,
    },

    /// The narrowest entry does not start at zero, so some widths would not resolve.
    #[error("The narrowest breakpoint '{name}' must have min width 0, found {min_width}")]
    MissingZeroFloor {
        /// Last breakpoint in the table.
        name: String,
        /// Its minimum width.
        min_width: u32,
    },

    /// A breakpoint declares zero columns.
    #[error("Breakpoint '{0}' must have at least one column")]
    ZeroColumns(String),
}

/// Result type alias for fleet-dashboard operations
pub type Result<T> = std::result::Result<T, Error>;
