//! Grid coordinates for a single panel.

use serde::{Deserialize, Serialize};

/// Placement of one panel at one breakpoint, in grid units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    /// Identifier of the placed panel.
    pub panel_id: String,
    /// Leftmost column (zero-based).
    pub column: u32,
    /// Topmost row (zero-based).
    pub row: u32,
    /// Width in columns (at least 1).
    pub width: u32,
    /// Height in rows (at least 1).
    pub height: u32,
}

impl GridPosition {
    pub fn new(panel_id: impl Into<String>, column: u32, row: u32, width: u32, height: u32) -> Self {
        Self {
            panel_id: panel_id.into(),
            column,
            row,
            width,
            height,
        }
    }

    /// First column to the right of the panel.
    pub fn right(&self) -> u32 {
        self.column.saturating_add(self.width)
    }

    /// First row below the panel.
    pub fn bottom(&self) -> u32 {
        self.row.saturating_add(self.height)
    }

    /// Whether the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &GridPosition) -> bool {
        self.column < other.right()
            && other.column < self.right()
            && self.row < other.bottom()
            && other.row < self.bottom()
    }

    /// Forces the position onto a grid of `columns`.
    ///
    /// Width is clamped to `1..=columns` and the column shifted left until
    /// the panel fits. Height is raised to at least one row.
    pub fn fit_to_columns(&mut self, columns: u32) {
        let columns = columns.max(1);
        self.width = self.width.clamp(1, columns);
        self.height = self.height.max(1);
        self.column = self.column.min(columns - self.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_side_by_side_is_false() {
        let a = GridPosition::new("a", 0, 0, 3, 6);
        let b = GridPosition::new("b", 3, 0, 6, 6);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_stacked_is_false() {
        let a = GridPosition::new("a", 0, 0, 12, 6);
        let b = GridPosition::new("b", 0, 6, 12, 2);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_shared_cell_is_true() {
        let a = GridPosition::new("a", 0, 0, 4, 4);
        let b = GridPosition::new("b", 3, 3, 4, 4);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained_is_true() {
        let outer = GridPosition::new("outer", 0, 0, 12, 10);
        let inner = GridPosition::new("inner", 4, 2, 2, 2);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn test_fit_to_columns_shifts_left() {
        let mut p = GridPosition::new("p", 10, 0, 4, 2);
        p.fit_to_columns(12);
        assert_eq!((p.column, p.width), (8, 4));
    }

    #[test]
    fn test_fit_to_columns_narrows_wide_panel() {
        let mut p = GridPosition::new("p", 3, 0, 12, 0);
        p.fit_to_columns(6);
        assert_eq!((p.column, p.width, p.height), (0, 6, 1));
    }

    #[test]
    fn test_serializes_camel_case() {
        let p = GridPosition::new("sites-list", 0, 6, 12, 2);
        let json = serde_json::to_string(&p).expect("serialize");
        assert!(json.contains("\"panelId\":\"sites-list\""));
    }
}
