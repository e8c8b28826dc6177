//! Fleet Dashboard layout engine
//!
//! A responsive grid of opaque panels that can be rearranged while the
//! dashboard is unlocked, with the arrangement persisted per storage key and
//! restored on the next start.
//!
//! The pieces, leaves first:
//! - [`panel`]: panels with optional size constraints, and the registry
//!   that owns them
//! - [`breakpoint`]: viewport width to named breakpoint and column count
//! - [`grid`]: positions, vertical compaction, move/resize, pixel metrics
//! - [`layout`]: the multi-breakpoint layout map and its persisted form
//! - [`store`]: load/save/reset over a key/value backend
//! - [`edit`]: the locked/unlocked toggle
//! - [`dashboard`]: the session object tying them together
//!
//! Configuration ([`config`]) and logging ([`logging`]) serve the
//! `fleetdash` binary.

pub mod breakpoint;
pub mod config;
pub mod dashboard;
pub mod edit;
pub mod error;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod panel;
pub mod store;
pub mod viewport;

pub use breakpoint::{Breakpoint, BreakpointTable};
pub use dashboard::{ChangeCause, Dashboard, DashboardOptions, Gesture, LayoutChange, ListenerId};
pub use edit::{EditMode, EditModeController};
pub use error::{BreakpointError, Error, LayoutError, PersistenceError, Result};
pub use grid::{compact, GridEngine, GridMetrics, GridPosition, PixelRect};
pub use layout::{Layout, LayoutSet};
pub use panel::{Panel, PanelConstraints, PanelRegistry};
pub use store::{FileBackend, KeyValueBackend, LayoutStore, MemoryBackend};
pub use viewport::ResizeDebouncer;
