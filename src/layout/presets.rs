//! Built-in mining dashboard panels and their default arrangement.
//!
//! Four panels are provided:
//! - **targeted-sites**: summary card of sites currently targeted
//! - **all-sites-map**: overview map of every site
//! - **target-sites**: target list card
//! - **sites-list**: full-width table of sites
//!
//! The default layout covers all five built-in breakpoints.

use crate::error::LayoutError;
use crate::grid::GridPosition;
use crate::panel::{Panel, PanelConstraints, PanelRegistry};

use super::Layout;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "dashboard-layout";

pub const TARGETED_SITES: &str = "targeted-sites";
pub const ALL_SITES_MAP: &str = "all-sites-map";
pub const TARGET_SITES: &str = "target-sites";
pub const SITES_LIST: &str = "sites-list";

/// The four mining panels, with their titles as content.
pub fn mining_registry() -> Result<PanelRegistry<&'static str>, LayoutError> {
    PanelRegistry::from_panels([
        Panel::new(TARGETED_SITES, "Targeted sites").min_size(2, 4),
        Panel::new(ALL_SITES_MAP, "All sites overview").min_size(4, 4),
        Panel::new(TARGET_SITES, "Target sites").min_size(2, 4),
        Panel::new(SITES_LIST, "Sites list").with_constraints(PanelConstraints {
            min_width: Some(6),
            min_height: Some(2),
            max_width: None,
            max_height: Some(3),
        }),
    ])
}

/// Default arrangement of the mining panels at every built-in breakpoint.
pub fn mining_layout() -> Layout {
    // (panel, column, row, width, height)
    let table: [(&str, [(u32, u32, u32, u32); 4]); 5] = [
        ("lg", [(0, 0, 3, 6), (3, 0, 6, 6), (9, 0, 3, 6), (0, 6, 12, 2)]),
        ("md", [(0, 0, 4, 5), (4, 0, 8, 5), (0, 5, 12, 5), (0, 10, 12, 2)]),
        ("sm", [(0, 0, 6, 5), (0, 5, 6, 5), (0, 10, 6, 5), (0, 15, 6, 3)]),
        ("xs", [(0, 0, 4, 5), (0, 5, 4, 5), (0, 10, 4, 5), (0, 15, 4, 3)]),
        ("xxs", [(0, 0, 2, 5), (0, 5, 2, 5), (0, 10, 2, 5), (0, 15, 2, 3)]),
    ];
    let ids = [TARGETED_SITES, ALL_SITES_MAP, TARGET_SITES, SITES_LIST];

    table
        .into_iter()
        .fold(Layout::new(), |layout, (breakpoint, cells)| {
            let positions = ids
                .iter()
                .zip(cells)
                .map(|(id, (column, row, width, height))| {
                    GridPosition::new(*id, column, row, width, height)
                })
                .collect();
            layout.with_breakpoint(breakpoint, positions)
        })
}
