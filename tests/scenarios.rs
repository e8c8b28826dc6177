//! End-to-end layout scenarios over the built-in mining dashboard.

use fleet_dashboard::breakpoint::BreakpointTable;
use fleet_dashboard::dashboard::{Dashboard, DashboardOptions};
use fleet_dashboard::edit::EditMode;
use fleet_dashboard::error::{Error, LayoutError, PersistenceError};
use fleet_dashboard::grid::{has_overlap, GridEngine};
use fleet_dashboard::layout::{
    mining_layout, mining_registry, Layout, LayoutSet, ALL_SITES_MAP, SITES_LIST, TARGETED_SITES,
    TARGET_SITES,
};
use fleet_dashboard::panel::{Panel, PanelRegistry};
use fleet_dashboard::store::{LayoutStore, MemoryBackend};

const KEY: &str = "dashboard-layout";

/// Scenario A: the default wide layout is overlap-free and eight rows tall.
#[test]
fn default_wide_layout_has_no_overlap() {
    let dashboard = Dashboard::open(
        mining_registry().expect("built-in registry"),
        LayoutStore::new(MemoryBackend::new()),
        DashboardOptions {
            defaults: mining_layout(),
            viewport_width: 1400,
            ..DashboardOptions::default()
        },
    );
    assert_eq!(dashboard.breakpoint().name, "lg");
    assert!(!has_overlap(dashboard.positions()));
    assert_eq!(dashboard.layout().height("lg"), Some(8));
}

/// Scenario B: moving the sites list to the top shifts every card down by
/// exactly its height, keeping their columns.
#[test]
fn moving_sites_list_to_top_shifts_cards() {
    let registry = mining_registry().expect("built-in registry");
    let table = BreakpointTable::default();
    let engine = GridEngine::new(&registry, &table);
    let before = mining_layout();

    let after = engine
        .apply_move(&before, "lg", SITES_LIST, 0, 0, EditMode::Unlocked)
        .expect("move");

    let sites = after.position("lg", SITES_LIST).expect("sites-list");
    assert_eq!((sites.column, sites.row), (0, 0));
    for id in [TARGETED_SITES, ALL_SITES_MAP, TARGET_SITES] {
        let old = before.position("lg", id).expect("before");
        let new = after.position("lg", id).expect("after");
        assert_eq!(new.row, old.row + 2, "{id} row");
        assert_eq!(new.column, old.column, "{id} column");
    }
    assert!(!has_overlap(after.positions("lg").expect("lg")));
}

/// Scenario C: resizing a locked panel fails and leaves the layout exactly
/// as it was.
#[test]
fn resizing_locked_panel_is_rejected() {
    let registry = PanelRegistry::from_panels(
        mining_registry()
            .expect("built-in registry")
            .iter()
            .map(|p| {
                Panel::new(p.id(), *p.content())
                    .with_constraints(*p.constraints())
                    .locked(p.id() == SITES_LIST)
            })
            .collect::<Vec<_>>(),
    )
    .expect("distinct ids");
    let table = BreakpointTable::default();
    let engine = GridEngine::new(&registry, &table);
    let layout = mining_layout();
    let before = LayoutSet::new(KEY, layout.clone()).to_json().expect("serialize");

    let err = engine
        .apply_resize(&layout, "lg", SITES_LIST, 12, 3, EditMode::Unlocked)
        .expect_err("locked");
    assert_eq!(
        err,
        LayoutError::PanelLocked {
            panel_id: SITES_LIST.to_string()
        }
    );
    let after = LayoutSet::new(KEY, layout).to_json().expect("serialize");
    assert_eq!(before, after);
}

/// Scenario D: a save that exceeds the storage quota keeps the change in
/// memory, while the store still returns the previously persisted layout.
#[test]
fn quota_exceeded_save_keeps_memory_and_previous_version() {
    let previous = Layout::new().with_breakpoint(
        "lg",
        mining_layout().positions("lg").expect("lg").to_vec(),
    );
    let mut store = LayoutStore::new(MemoryBackend::with_quota(2048));
    store.save(KEY, &previous).expect("small layout fits");

    let mut dashboard = Dashboard::open(
        mining_registry().expect("built-in registry"),
        store,
        DashboardOptions {
            defaults: mining_layout(),
            ..DashboardOptions::default()
        },
    );
    dashboard.unlock();
    let err = dashboard
        .move_panel(SITES_LIST, 0, 0)
        .expect_err("quota exceeded");
    assert!(matches!(
        err,
        Error::Persistence(PersistenceError::QuotaExceeded { .. })
    ));

    assert_eq!(dashboard.position(SITES_LIST).expect("sites-list").row, 0);
    assert!(dashboard.has_unsaved_changes());
    assert_eq!(dashboard.store().load(KEY, mining_layout()), previous);
}
