//! Opening, viewport, edit mode, move and resize tests for Dashboard.

use super::{mining_options, open_mining, open_with};
use crate::dashboard::{Dashboard, DashboardOptions};
use crate::edit::EditMode;
use crate::error::{Error, LayoutError};
use crate::grid::{has_overlap, GridPosition};
use crate::layout::{
    mining_layout, mining_registry, ALL_SITES_MAP, SITES_LIST, TARGETED_SITES, TARGET_SITES,
};
use crate::panel::{Panel, PanelRegistry};
use crate::store::{KeyValueBackend, LayoutStore, MemoryBackend};

// =========================================================================
// Opening
// =========================================================================

#[test]
fn test_open_empty_store_uses_defaults() {
    let dashboard = open_mining();
    assert_eq!(dashboard.layout(), &mining_layout());
    assert_eq!(dashboard.breakpoint().name, "lg");
    assert_eq!(dashboard.viewport_width(), 1280);
    assert_eq!(dashboard.edit_mode(), EditMode::Locked);
    assert!(!dashboard.has_unsaved_changes());
    assert!(dashboard.store().backend().is_empty(), "opening never writes");
}

#[test]
fn test_open_resolves_breakpoint_from_width() {
    for (width, expected) in [(1500, "lg"), (1000, "md"), (800, "sm"), (500, "xs"), (320, "xxs")] {
        let dashboard = open_with(MemoryBackend::new(), width);
        assert_eq!(dashboard.breakpoint().name, expected, "width {width}");
        assert_eq!(dashboard.positions().len(), 4);
    }
}

#[test]
fn test_open_without_defaults_places_every_panel() {
    let dashboard: Dashboard<&'static str, MemoryBackend> = Dashboard::open(
        mining_registry().expect("built-in registry"),
        LayoutStore::new(MemoryBackend::new()),
        DashboardOptions::default(),
    );
    for bp in dashboard.breakpoints().iter() {
        let positions = dashboard.layout().positions(&bp.name).expect("breakpoint");
        assert_eq!(positions.len(), 4, "breakpoint {}", bp.name);
        assert!(!has_overlap(positions));
    }
}

#[test]
fn test_open_with_extra_registered_panel() {
    let mut registry = mining_registry().expect("built-in registry");
    registry
        .register(Panel::new("haul-trucks", "Haul trucks").min_size(4, 2))
        .expect("new id");
    let dashboard = Dashboard::open(
        registry,
        LayoutStore::new(MemoryBackend::new()),
        mining_options(1280),
    );
    let trucks = dashboard.position("haul-trucks").expect("placed");
    assert_eq!((trucks.column, trucks.row), (0, 8));
    assert_eq!((trucks.width, trucks.height), (4, 2));
    assert_eq!(dashboard.layout().height("lg"), Some(10));
}

// =========================================================================
// Viewport
// =========================================================================

#[test]
fn test_set_viewport_width_reports_breakpoint_change() {
    let mut dashboard = open_mining();
    assert!(!dashboard.set_viewport_width(1300), "still lg");
    assert!(dashboard.set_viewport_width(800));
    assert_eq!(dashboard.breakpoint().name, "sm");
    assert_eq!(dashboard.breakpoint().columns, 6);
    assert!(!dashboard.set_viewport_width(900), "still sm");
    assert_eq!(dashboard.viewport_width(), 900);
}

#[test]
fn test_positions_follow_active_breakpoint() {
    let mut dashboard = open_mining();
    dashboard.set_viewport_width(800);
    let sites = dashboard.position(SITES_LIST).expect("sites-list");
    assert_eq!(sites, &GridPosition::new(SITES_LIST, 0, 15, 6, 3));
}

// =========================================================================
// Edit mode
// =========================================================================

#[test]
fn test_move_rejected_while_locked() {
    let mut dashboard = open_mining();
    let err = dashboard
        .move_panel(SITES_LIST, 0, 0)
        .expect_err("locked dashboard");
    assert!(matches!(err, Error::Layout(LayoutError::EditModeDisabled)));
    assert_eq!(dashboard.layout(), &mining_layout());
    assert!(dashboard.store().backend().is_empty());
}

#[test]
fn test_toggle_edit_mode() {
    let mut dashboard = open_mining();
    assert_eq!(dashboard.toggle_edit_mode(), EditMode::Unlocked);
    assert_eq!(dashboard.toggle_edit_mode(), EditMode::Locked);
}

#[test]
fn test_read_only_dashboard_never_unlocks() {
    let options = crate::dashboard::DashboardOptions {
        editable: false,
        ..mining_options(1280)
    };
    let mut dashboard = Dashboard::open(
        mining_registry().expect("built-in registry"),
        LayoutStore::new(MemoryBackend::new()),
        options,
    );
    assert!(!dashboard.is_editable());
    assert!(!dashboard.unlock());
    assert_eq!(dashboard.toggle_edit_mode(), EditMode::Locked);
    assert!(dashboard.move_panel(SITES_LIST, 0, 0).is_err());
}

#[test]
fn test_lock_keeps_committed_changes() {
    let mut dashboard = open_mining();
    dashboard.unlock();
    dashboard.move_panel(SITES_LIST, 0, 0).expect("move");
    dashboard.lock();
    assert_eq!(dashboard.edit_mode(), EditMode::Locked);
    assert_eq!(dashboard.position(SITES_LIST).expect("sites-list").row, 0);
}

// =========================================================================
// Move and resize
// =========================================================================

#[test]
fn test_move_sites_list_to_top() {
    let mut dashboard = open_mining();
    dashboard.unlock();
    dashboard.move_panel(SITES_LIST, 0, 0).expect("move");

    let rows: Vec<(&str, u32)> = dashboard
        .positions()
        .iter()
        .map(|p| (p.panel_id.as_str(), p.row))
        .collect();
    assert_eq!(
        rows,
        vec![
            (TARGETED_SITES, 2),
            (ALL_SITES_MAP, 2),
            (TARGET_SITES, 2),
            (SITES_LIST, 0)
        ]
    );
    assert!(!dashboard.has_unsaved_changes());
    assert!(dashboard
        .store()
        .backend()
        .read("dashboard-layout")
        .expect("read")
        .is_some());
}

#[test]
fn test_move_only_changes_active_breakpoint() {
    let mut dashboard = open_mining();
    dashboard.set_viewport_width(800);
    dashboard.unlock();
    dashboard.move_panel(TARGET_SITES, 0, 0).expect("move");

    let row = |id: &str| dashboard.position(id).expect("placed").row;
    assert_eq!(row(TARGET_SITES), 0);
    assert_eq!(row(TARGETED_SITES), 5);
    assert_eq!(row(ALL_SITES_MAP), 10);
    assert_eq!(row(SITES_LIST), 15);
    assert_eq!(
        dashboard.layout().positions("lg"),
        mining_layout().positions("lg")
    );
}

#[test]
fn test_resize_clamps_and_pushes_neighbours() {
    let mut dashboard = open_mining();
    dashboard.unlock();
    dashboard.resize_panel(ALL_SITES_MAP, 6, 8).expect("resize");
    assert_eq!(dashboard.position(ALL_SITES_MAP).expect("map").height, 8);
    assert_eq!(dashboard.position(SITES_LIST).expect("list").row, 8);

    dashboard.resize_panel(SITES_LIST, 12, 10).expect("resize");
    assert_eq!(dashboard.position(SITES_LIST).expect("list").height, 3);
    assert!(!has_overlap(dashboard.positions()));
}

#[test]
fn test_unknown_panel_is_rejected() {
    let mut dashboard = open_mining();
    dashboard.unlock();
    let err = dashboard
        .resize_panel("haul-trucks", 2, 2)
        .expect_err("unknown");
    assert!(matches!(
        err,
        Error::Layout(LayoutError::UnknownPanel { ref panel_id }) if panel_id == "haul-trucks"
    ));
}

#[test]
fn test_locked_panel_is_rejected() {
    let registry = PanelRegistry::from_panels([
        Panel::new("header", "Header").locked(true),
        Panel::new("body", "Body"),
    ])
    .expect("distinct ids");
    let mut dashboard = Dashboard::open(
        registry,
        LayoutStore::new(MemoryBackend::new()),
        DashboardOptions::default(),
    );
    dashboard.unlock();
    let before = dashboard.layout().clone();
    let err = dashboard.move_panel("header", 0, 3).expect_err("locked");
    assert!(matches!(err, Error::Layout(LayoutError::PanelLocked { .. })));
    assert_eq!(dashboard.layout(), &before);
    dashboard.move_panel("body", 0, 0).expect("body moves");
}
