//! Validated move and resize operations over a [`Layout`].
//!
//! Every operation checks the request before touching anything, works on a
//! copy of the layout, and re-compacts the affected breakpoint before
//! returning. The caller's layout is never modified; on error it is exactly
//! as it was.

use crate::breakpoint::BreakpointTable;
use crate::edit::EditMode;
use crate::error::LayoutError;
use crate::layout::Layout;
use crate::panel::{Panel, PanelRegistry};

use super::compact::{compact, grid_height, push_down_collisions};
use super::position::GridPosition;

/// Geometry engine bound to a panel registry and breakpoint table.
#[derive(Debug)]
pub struct GridEngine<'a, T> {
    registry: &'a PanelRegistry<T>,
    breakpoints: &'a BreakpointTable,
}

/// A validated mutation target.
struct Target<'a, T> {
    panel: &'a Panel<T>,
    index: usize,
    columns: u32,
}

impl<'a, T> GridEngine<'a, T> {
    pub fn new(registry: &'a PanelRegistry<T>, breakpoints: &'a BreakpointTable) -> Self {
        Self {
            registry,
            breakpoints,
        }
    }

    /// Moves a panel to `(column, row)` at `breakpoint`.
    ///
    /// The column is clamped so the panel stays on-grid. Panels the moved
    /// panel lands on are pushed below it, then the breakpoint is compacted.
    pub fn apply_move(
        &self,
        layout: &Layout,
        breakpoint: &str,
        panel_id: &str,
        column: u32,
        row: u32,
        mode: EditMode,
    ) -> Result<Layout, LayoutError> {
        let target = self.validate(layout, breakpoint, panel_id, mode)?;
        self.mutate(layout, breakpoint, &target, |pos, columns| {
            pos.column = column;
            pos.row = row;
            pos.fit_to_columns(columns);
        })
    }

    /// Resizes a panel to `width` x `height` at `breakpoint`.
    ///
    /// The size is clamped to the panel's constraints and the grid, and the
    /// column shifted left if the new width would overflow.
    pub fn apply_resize(
        &self,
        layout: &Layout,
        breakpoint: &str,
        panel_id: &str,
        width: u32,
        height: u32,
        mode: EditMode,
    ) -> Result<Layout, LayoutError> {
        let target = self.validate(layout, breakpoint, panel_id, mode)?;
        let constraints = *target.panel.constraints();
        self.mutate(layout, breakpoint, &target, |pos, columns| {
            pos.width = constraints.clamp_width(width, columns);
            pos.height = constraints.clamp_height(height);
            pos.fit_to_columns(columns);
        })
    }

    /// Checks a mutation request without applying it.
    ///
    /// Order of checks: edit mode, breakpoint, panel, lock.
    pub fn check(
        &self,
        layout: &Layout,
        breakpoint: &str,
        panel_id: &str,
        mode: EditMode,
    ) -> Result<(), LayoutError> {
        self.validate(layout, breakpoint, panel_id, mode).map(|_| ())
    }

    fn validate(
        &self,
        layout: &Layout,
        breakpoint: &str,
        panel_id: &str,
        mode: EditMode,
    ) -> Result<Target<'a, T>, LayoutError> {
        if !mode.allows_mutation() {
            return Err(LayoutError::EditModeDisabled);
        }
        let unknown_breakpoint = || LayoutError::UnknownBreakpoint {
            name: breakpoint.to_string(),
        };
        let columns = self
            .breakpoints
            .columns(breakpoint)
            .ok_or_else(unknown_breakpoint)?;
        let positions = layout.positions(breakpoint).ok_or_else(unknown_breakpoint)?;

        let unknown_panel = || LayoutError::UnknownPanel {
            panel_id: panel_id.to_string(),
        };
        let panel = self.registry.get(panel_id).ok_or_else(unknown_panel)?;
        let index = positions
            .iter()
            .position(|p| p.panel_id == panel_id)
            .ok_or_else(unknown_panel)?;

        if panel.is_locked() {
            return Err(LayoutError::PanelLocked {
                panel_id: panel_id.to_string(),
            });
        }

        Ok(Target {
            panel,
            index,
            columns,
        })
    }

    fn mutate(
        &self,
        layout: &Layout,
        breakpoint: &str,
        target: &Target<'a, T>,
        change: impl FnOnce(&mut GridPosition, u32),
    ) -> Result<Layout, LayoutError> {
        let mut positions = layout
            .positions(breakpoint)
            .ok_or_else(|| LayoutError::UnknownBreakpoint {
                name: breakpoint.to_string(),
            })?
            .to_vec();

        change(&mut positions[target.index], target.columns);
        push_down_collisions(&mut positions, target.index);

        let mut next = layout.clone();
        next.set_positions(breakpoint, compact(&positions, target.columns));
        Ok(next)
    }

    /// Compacts every breakpoint of the table present in `layout`.
    pub fn compact_layout(&self, layout: &Layout) -> Layout {
        let mut next = layout.clone();
        for bp in self.breakpoints.iter() {
            if let Some(positions) = layout.positions(&bp.name) {
                next.set_positions(bp.name.clone(), compact(positions, bp.columns));
            }
        }
        next
    }

    /// Brings a stored layout in line with the registry and breakpoint table.
    ///
    /// For every breakpoint in the table: positions for unregistered panels
    /// and repeated entries are dropped, sizes are clamped to each panel's
    /// constraints, and every registered panel without a position gets the
    /// one from `defaults` or, failing that, a slot at the bottom of the
    /// grid. Breakpoints outside the table are discarded. The result is
    /// compacted.
    pub fn reconcile(&self, layout: &Layout, defaults: &Layout) -> Layout {
        let mut next = Layout::new();
        for bp in self.breakpoints.iter() {
            let stored = layout
                .positions(&bp.name)
                .or_else(|| defaults.positions(&bp.name))
                .unwrap_or(&[]);

            let mut positions: Vec<GridPosition> = Vec::with_capacity(self.registry.len());
            for pos in stored {
                let Some(panel) = self.registry.get(&pos.panel_id) else {
                    tracing::debug!("Dropping position for unregistered panel {}", pos.panel_id);
                    continue;
                };
                if positions.iter().any(|p| p.panel_id == pos.panel_id) {
                    continue;
                }
                positions.push(clamped(pos.clone(), panel, bp.columns));
            }

            for panel in self.registry.iter() {
                if positions.iter().any(|p| p.panel_id == panel.id()) {
                    continue;
                }
                let pos = match defaults.position(&bp.name, panel.id()) {
                    Some(default) => default.clone(),
                    None => {
                        let c = panel.constraints();
                        GridPosition::new(
                            panel.id(),
                            0,
                            grid_height(&positions),
                            c.min_width.unwrap_or(bp.columns),
                            c.min_height.unwrap_or(1),
                        )
                    }
                };
                positions.push(clamped(pos, panel, bp.columns));
            }

            next.set_positions(bp.name.clone(), compact(&positions, bp.columns));
        }
        next
    }
}

fn clamped<T>(mut pos: GridPosition, panel: &Panel<T>, columns: u32) -> GridPosition {
    let c = panel.constraints();
    pos.width = c.clamp_width(pos.width, columns);
    pos.height = c.clamp_height(pos.height);
    pos.fit_to_columns(columns);
    pos
}
