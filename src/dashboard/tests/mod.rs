//! Tests for the Dashboard session.
//!
//! - `basic`: opening, viewport changes, edit mode, move and resize
//! - `gesture`: preview, commit, cancel and abandoned gestures
//! - `persistence`: saving, reopening, reset and failed saves
//! - `subscriber`: change notifications

mod basic;

use super::{Dashboard, DashboardOptions};
use crate::layout::{mining_layout, mining_registry};
use crate::store::{LayoutStore, MemoryBackend};

pub(super) type TestDashboard = Dashboard<&'static str, MemoryBackend>;

/// Options for the mining panels at `width`.
pub(super) fn mining_options(width: u32) -> DashboardOptions {
    DashboardOptions {
        defaults: mining_layout(),
        viewport_width: width,
        ..DashboardOptions::default()
    }
}

/// A mining dashboard at 1280px over an empty in-memory store.
pub(super) fn open_mining() -> TestDashboard {
    open_with(MemoryBackend::new(), 1280)
}

pub(super) fn open_with(backend: MemoryBackend, width: u32) -> TestDashboard {
    Dashboard::open(
        mining_registry().expect("built-in registry"),
        LayoutStore::new(backend),
        mining_options(width),
    )
}
