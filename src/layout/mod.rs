//! Multi-breakpoint layouts and their persisted envelope.
//!
//! A [`Layout`] maps breakpoint names to an ordered sequence of
//! [`GridPosition`]s. A [`LayoutSet`] wraps a layout with the schema version
//! and the storage key it was saved under; it is the value written to the
//! layout store.

mod presets;

pub use presets::{
    mining_layout, mining_registry, ALL_SITES_MAP, DEFAULT_STORAGE_KEY, SITES_LIST, TARGETED_SITES,
    TARGET_SITES,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::grid::{grid_height, GridPosition};

/// Current schema version of the persisted [`LayoutSet`].
pub const SCHEMA_VERSION: u32 = 1;

/// Breakpoint name to ordered panel positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    breakpoints: BTreeMap<String, Vec<GridPosition>>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the positions for a breakpoint (builder pattern).
    #[must_use]
    pub fn with_breakpoint(mut self, name: impl Into<String>, positions: Vec<GridPosition>) -> Self {
        self.set_positions(name, positions);
        self
    }

    /// Replaces the positions for a breakpoint.
    pub fn set_positions(&mut self, name: impl Into<String>, positions: Vec<GridPosition>) {
        self.breakpoints.insert(name.into(), positions);
    }

    /// Positions for a breakpoint, in stacking-priority order.
    pub fn positions(&self, breakpoint: &str) -> Option<&[GridPosition]> {
        self.breakpoints.get(breakpoint).map(Vec::as_slice)
    }

    /// Position of one panel at one breakpoint.
    pub fn position(&self, breakpoint: &str, panel_id: &str) -> Option<&GridPosition> {
        self.positions(breakpoint)?
            .iter()
            .find(|p| p.panel_id == panel_id)
    }

    /// Grid height (first empty row) at a breakpoint.
    pub fn height(&self, breakpoint: &str) -> Option<u32> {
        self.positions(breakpoint).map(grid_height)
    }

    /// Breakpoint names in sorted order.
    pub fn breakpoint_names(&self) -> impl Iterator<Item = &str> {
        self.breakpoints.keys().map(String::as_str)
    }

    pub fn contains_breakpoint(&self, breakpoint: &str) -> bool {
        self.breakpoints.contains_key(breakpoint)
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

/// The persisted form of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSet {
    /// Schema version marker, see [`SCHEMA_VERSION`].
    pub version: u32,
    /// Storage key the set was saved under.
    pub key: String,
    /// The layouts themselves.
    pub layouts: Layout,
}

impl LayoutSet {
    /// Wraps a layout with the current schema version.
    pub fn new(key: impl Into<String>, layouts: Layout) -> Self {
        Self {
            version: SCHEMA_VERSION,
            key: key.into(),
            layouts,
        }
    }

    /// Pretty JSON, as written to the store.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string_pretty(self).map_err(|e| PersistenceError::Serialize {
            key: self.key.clone(),
            message: e.to_string(),
        })
    }

    pub fn into_layout(self) -> Layout {
        self.layouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        Layout::new()
            .with_breakpoint(
                "lg",
                vec![
                    GridPosition::new("a", 0, 0, 6, 4),
                    GridPosition::new("b", 6, 0, 6, 2),
                ],
            )
            .with_breakpoint("xxs", vec![GridPosition::new("a", 0, 0, 2, 4)])
    }

    #[test]
    fn test_layout_lookup() {
        let layout = sample();
        assert_eq!(layout.positions("lg").map(<[_]>::len), Some(2));
        assert_eq!(layout.position("lg", "b").map(|p| p.column), Some(6));
        assert!(layout.position("xxs", "b").is_none());
        assert!(layout.positions("md").is_none());
    }

    #[test]
    fn test_layout_height() {
        let layout = sample();
        assert_eq!(layout.height("lg"), Some(4));
        assert_eq!(layout.height("md"), None);
    }

    #[test]
    fn test_breakpoint_names_sorted() {
        let layout = sample();
        let names: Vec<&str> = layout.breakpoint_names().collect();
        assert_eq!(names, vec!["lg", "xxs"]);
    }

    #[test]
    fn test_layout_serializes_as_plain_map() {
        let layout = Layout::new().with_breakpoint("lg", vec![GridPosition::new("a", 0, 0, 1, 1)]);
        let json = serde_json::to_value(&layout).expect("serialize");
        assert!(json.get("lg").is_some(), "layout should be a bare map: {json}");
    }

    #[test]
    fn test_layout_set_json_shape() {
        let set = LayoutSet::new("dashboard-layout", sample());
        let json: serde_json::Value =
            serde_json::from_str(&set.to_json().expect("to_json")).expect("valid json");
        assert_eq!(json["version"], SCHEMA_VERSION);
        assert_eq!(json["key"], "dashboard-layout");
        assert_eq!(json["layouts"]["lg"][1]["panelId"], "b");
    }

    #[test]
    fn test_layout_set_into_layout() {
        let set = LayoutSet::new("k", sample());
        assert_eq!(set.into_layout(), sample());
    }
}
