//! The dashboard session: one committed layout, its store, and listeners.
//!
//! A [`Dashboard`] owns everything the view layer needs to render and
//! rearrange panels. Every user action runs to completion through
//! `&mut self`: validate, compute the next layout, commit it in memory,
//! notify listeners, then persist.
//!
//! # Example
//!
//! ```
//! use fleet_dashboard::dashboard::{Dashboard, DashboardOptions};
//! use fleet_dashboard::layout::{mining_layout, mining_registry, SITES_LIST};
//! use fleet_dashboard::store::{LayoutStore, MemoryBackend};
//!
//! let options = DashboardOptions {
//!     defaults: mining_layout(),
//!     ..DashboardOptions::default()
//! };
//! let mut dashboard = Dashboard::open(
//!     mining_registry().unwrap(),
//!     LayoutStore::new(MemoryBackend::new()),
//!     options,
//! );
//! assert_eq!(dashboard.breakpoint().name, "lg");
//!
//! dashboard.unlock();
//! dashboard.move_panel(SITES_LIST, 0, 0).unwrap();
//! assert_eq!(dashboard.position(SITES_LIST).unwrap().row, 0);
//! ```

mod gesture;

pub use gesture::Gesture;

use std::fmt;

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::edit::{EditMode, EditModeController};
use crate::error::{Error, LayoutError};
use crate::grid::{GridEngine, GridPosition};
use crate::layout::{Layout, DEFAULT_STORAGE_KEY};
use crate::panel::PanelRegistry;
use crate::store::{KeyValueBackend, LayoutStore};

#[cfg(test)]
mod tests;

/// Viewport width assumed when none is supplied.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Why listeners are being notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeCause {
    /// A panel was moved and the result committed.
    Moved { panel_id: String },
    /// A panel was resized and the result committed.
    Resized { panel_id: String },
    /// The viewport crossed into another breakpoint.
    BreakpointChanged { from: String, to: String },
    /// The layout was restored to its default.
    Reset,
}

/// What listeners receive after each committed change.
#[derive(Debug, Clone, Copy)]
pub struct LayoutChange<'a> {
    pub cause: &'a ChangeCause,
    /// Breakpoint active after the change.
    pub breakpoint: &'a Breakpoint,
    /// Layout after the change, all breakpoints.
    pub layout: &'a Layout,
}

impl LayoutChange<'_> {
    /// Positions at the active breakpoint.
    pub fn positions(&self) -> &[GridPosition] {
        self.layout.positions(&self.breakpoint.name).unwrap_or(&[])
    }
}

/// Handle returned by [`Dashboard::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&LayoutChange<'_>)>;

/// Settings for [`Dashboard::open`].
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub breakpoints: BreakpointTable,
    pub storage_key: String,
    /// Layout used on first run, after a reset, and for panels missing from
    /// a stored layout.
    pub defaults: Layout,
    pub viewport_width: u32,
    /// When `false` the dashboard can never be unlocked.
    pub editable: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointTable::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            defaults: Layout::new(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            editable: true,
        }
    }
}

/// A responsive grid of panels with a persisted arrangement.
pub struct Dashboard<T, B> {
    registry: PanelRegistry<T>,
    breakpoints: BreakpointTable,
    store: LayoutStore<B>,
    storage_key: String,
    defaults: Layout,
    layout: Layout,
    breakpoint: Breakpoint,
    viewport_width: u32,
    edit: EditModeController,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    unsaved: bool,
}

impl<T, B: KeyValueBackend> Dashboard<T, B> {
    /// Loads the stored layout for `options.storage_key` and reconciles it
    /// with `registry`.
    ///
    /// Never fails: missing or unusable stored data yields the defaults.
    pub fn open(registry: PanelRegistry<T>, store: LayoutStore<B>, options: DashboardOptions) -> Self {
        let DashboardOptions {
            breakpoints,
            storage_key,
            defaults,
            viewport_width,
            editable,
        } = options;

        let stored = store.load(&storage_key, defaults.clone());
        let layout = GridEngine::new(&registry, &breakpoints).reconcile(&stored, &defaults);
        let breakpoint = breakpoints.resolve(viewport_width).clone();
        tracing::debug!(
            "Opened dashboard '{}' at {}px ({})",
            storage_key,
            viewport_width,
            breakpoint
        );

        Self {
            registry,
            breakpoints,
            store,
            storage_key,
            defaults,
            layout,
            breakpoint,
            viewport_width,
            edit: if editable {
                EditModeController::new()
            } else {
                EditModeController::read_only()
            },
            listeners: Vec::new(),
            next_listener: 0,
            unsaved: false,
        }
    }

    // -----------------------------------------------------------------------
    // Viewport
    // -----------------------------------------------------------------------

    /// Records a new viewport width. Returns `true` if the breakpoint changed,
    /// in which case listeners are notified.
    pub fn set_viewport_width(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let next = self.breakpoints.resolve(width);
        if next.name == self.breakpoint.name {
            return false;
        }
        let previous = std::mem::replace(&mut self.breakpoint, next.clone());
        tracing::debug!(
            "Viewport {}px: breakpoint {} -> {}",
            width,
            previous.name,
            self.breakpoint.name
        );
        let cause = ChangeCause::BreakpointChanged {
            from: previous.name,
            to: self.breakpoint.name.clone(),
        };
        self.notify(&cause);
        true
    }

    // -----------------------------------------------------------------------
    // Edit mode
    // -----------------------------------------------------------------------

    /// Flips between locked and unlocked. A read-only dashboard stays locked.
    pub fn toggle_edit_mode(&mut self) -> EditMode {
        self.edit.toggle()
    }

    /// Returns `false` if the dashboard is read-only.
    pub fn unlock(&mut self) -> bool {
        self.edit.unlock()
    }

    pub fn lock(&mut self) {
        self.edit.lock();
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Moves a panel at the active breakpoint and persists the result.
    ///
    /// Validation failures leave everything untouched. If only the save
    /// fails, the move stays committed in memory,
    /// [`has_unsaved_changes`](Self::has_unsaved_changes) turns `true`, and
    /// the persistence error is returned.
    pub fn move_panel(&mut self, panel_id: &str, column: u32, row: u32) -> Result<(), Error> {
        let next = self
            .engine()
            .apply_move(
                &self.layout,
                &self.breakpoint.name,
                panel_id,
                column,
                row,
                self.edit.mode(),
            )
            .map_err(rejected)?;
        self.commit(
            next,
            ChangeCause::Moved {
                panel_id: panel_id.to_string(),
            },
        )
    }

    /// Resizes a panel at the active breakpoint and persists the result.
    ///
    /// Failure handling matches [`move_panel`](Self::move_panel).
    pub fn resize_panel(&mut self, panel_id: &str, width: u32, height: u32) -> Result<(), Error> {
        let next = self
            .engine()
            .apply_resize(
                &self.layout,
                &self.breakpoint.name,
                panel_id,
                width,
                height,
                self.edit.mode(),
            )
            .map_err(rejected)?;
        self.commit(
            next,
            ChangeCause::Resized {
                panel_id: panel_id.to_string(),
            },
        )
    }

    /// Starts a drag or resize of `panel_id`.
    ///
    /// Nothing is committed until [`Gesture::commit`]; dropping the gesture
    /// abandons it.
    pub fn begin_gesture(&mut self, panel_id: &str) -> Result<Gesture<'_, T, B>, Error> {
        self.engine()
            .check(&self.layout, &self.breakpoint.name, panel_id, self.edit.mode())
            .map_err(rejected)?;
        Ok(Gesture::new(self, panel_id))
    }

    /// Clears the stored layout and returns to the defaults.
    pub fn reset(&mut self) -> Result<(), Error> {
        let defaults = self.store.reset(&self.storage_key, self.defaults.clone())?;
        self.layout = self.engine().reconcile(&defaults, &defaults);
        self.unsaved = false;
        self.notify(&ChangeCause::Reset);
        Ok(())
    }

    /// Writes the committed layout to the store.
    pub fn save(&mut self) -> Result<(), Error> {
        match self.store.save(&self.storage_key, &self.layout) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                tracing::warn!(
                    "Layout '{}' changed but could not be saved: {}",
                    self.storage_key,
                    e
                );
                Err(e.into())
            }
        }
    }

    fn commit(&mut self, layout: Layout, cause: ChangeCause) -> Result<(), Error> {
        self.layout = layout;
        self.unsaved = true;
        self.notify(&cause);
        self.save()
    }

    fn engine(&self) -> GridEngine<'_, T> {
        GridEngine::new(&self.registry, &self.breakpoints)
    }

    // -----------------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------------

    /// Registers `listener` to run after every committed change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&LayoutChange<'_>) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, cause: &ChangeCause) {
        let change = LayoutChange {
            cause,
            breakpoint: &self.breakpoint,
            layout: &self.layout,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn registry(&self) -> &PanelRegistry<T> {
        &self.registry
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// The active breakpoint.
    pub fn breakpoint(&self) -> &Breakpoint {
        &self.breakpoint
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// The committed layout across all breakpoints.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Committed positions at the active breakpoint.
    pub fn positions(&self) -> &[GridPosition] {
        self.layout.positions(&self.breakpoint.name).unwrap_or(&[])
    }

    /// Committed position of one panel at the active breakpoint.
    pub fn position(&self, panel_id: &str) -> Option<&GridPosition> {
        self.layout.position(&self.breakpoint.name, panel_id)
    }

    pub fn defaults(&self) -> &Layout {
        &self.defaults
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit.mode()
    }

    pub fn is_editable(&self) -> bool {
        self.edit.is_editable()
    }

    /// `true` when the committed layout differs from what was last saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn store(&self) -> &LayoutStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LayoutStore<B> {
        &mut self.store
    }
}

fn rejected(err: LayoutError) -> Error {
    tracing::debug!("Rejected layout change: {}", err);
    err.into()
}

impl<T, B> fmt::Debug for Dashboard<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("storage_key", &self.storage_key)
            .field("breakpoint", &self.breakpoint.name)
            .field("viewport_width", &self.viewport_width)
            .field("edit_mode", &self.edit.mode())
            .field("panels", &self.registry.len())
            .field("listeners", &self.listeners.len())
            .field("unsaved", &self.unsaved)
            .finish()
    }
}
