//! Conversion from grid units to pixel rectangles.
//!
//! Column width is derived from the container width:
//! `(container - margin_x * (columns - 1) - padding_x * 2) / columns`.
//! A panel spanning `w` columns is `w` column widths plus the `w - 1`
//! margins between them; rows work the same way with a fixed row height.

use serde::{Deserialize, Serialize};

use super::position::GridPosition;

/// Pixel rectangle of a placed panel, relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Row height, margins and padding of the grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Height of one grid row in pixels.
    pub row_height: u32,
    /// Horizontal and vertical gap between panels.
    pub margin: [u32; 2],
    /// Horizontal and vertical padding inside the container.
    pub container_padding: [u32; 2],
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            row_height: 80,
            margin: [16, 16],
            container_padding: [0, 0],
        }
    }
}

impl GridMetrics {
    /// Width of a single column for a container of `container_width` pixels.
    pub fn column_width(&self, container_width: u32, columns: u32) -> f64 {
        let columns = columns.max(1);
        let gutters = f64::from(self.margin[0]) * f64::from(columns - 1);
        let padding = f64::from(self.container_padding[0]) * 2.0;
        ((f64::from(container_width) - gutters - padding) / f64::from(columns)).max(0.0)
    }

    /// Pixel rectangle for `position` on a grid of `columns`.
    pub fn to_pixels(&self, position: &GridPosition, container_width: u32, columns: u32) -> PixelRect {
        let col_width = self.column_width(container_width, columns);
        let row_height = f64::from(self.row_height);
        let [margin_x, margin_y] = self.margin.map(f64::from);
        let [pad_x, pad_y] = self.container_padding.map(f64::from);

        let x = (col_width + margin_x) * f64::from(position.column) + pad_x;
        let y = (row_height + margin_y) * f64::from(position.row) + pad_y;
        let width = col_width * f64::from(position.width)
            + margin_x * f64::from(position.width.saturating_sub(1));
        let height = row_height * f64::from(position.height)
            + margin_y * f64::from(position.height.saturating_sub(1));

        PixelRect {
            x: round_px(x),
            y: round_px(y),
            width: round_px(width),
            height: round_px(height),
        }
    }

    /// Container height needed to show `rows` grid rows.
    pub fn container_height(&self, rows: u32) -> u32 {
        let content = if rows == 0 {
            0
        } else {
            self.row_height
                .saturating_mul(rows)
                .saturating_add(self.margin[1].saturating_mul(rows - 1))
        };
        content.saturating_add(self.container_padding[1].saturating_mul(2))
    }
}

fn round_px(value: f64) -> u32 {
    // `as` saturates on overflow and maps NaN to 0.
    value.round().max(0.0) as u32
}
