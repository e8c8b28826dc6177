//! In-progress drag and resize gestures.

use crate::error::{Error, LayoutError};
use crate::layout::Layout;
use crate::store::KeyValueBackend;

use super::{ChangeCause, Dashboard};

/// A drag or resize of one panel that has not been committed yet.
///
/// Each `drag_to` / `resize_to` computes a speculative layout from the
/// committed one; the latest becomes the preview. [`commit`](Self::commit)
/// applies the preview exactly like [`Dashboard::move_panel`] would.
/// [`cancel`](Self::cancel), or dropping the gesture, discards it without
/// touching the committed layout or the store.
pub struct Gesture<'d, T, B> {
    dashboard: &'d mut Dashboard<T, B>,
    panel_id: String,
    preview: Option<(Layout, ChangeCause)>,
    finished: bool,
}

impl<'d, T, B: KeyValueBackend> Gesture<'d, T, B> {
    pub(super) fn new(dashboard: &'d mut Dashboard<T, B>, panel_id: &str) -> Self {
        tracing::debug!("Gesture started on {}", panel_id);
        Self {
            dashboard,
            panel_id: panel_id.to_string(),
            preview: None,
            finished: false,
        }
    }

    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    /// Previews the panel at `(column, row)`.
    pub fn drag_to(&mut self, column: u32, row: u32) -> Result<&Layout, LayoutError> {
        let dashboard = &*self.dashboard;
        let next = dashboard.engine().apply_move(
            &dashboard.layout,
            &dashboard.breakpoint.name,
            &self.panel_id,
            column,
            row,
            dashboard.edit.mode(),
        )?;
        let cause = ChangeCause::Moved {
            panel_id: self.panel_id.clone(),
        };
        let (layout, _) = self.preview.insert((next, cause));
        Ok(layout)
    }

    /// Previews the panel at `width` x `height`.
    pub fn resize_to(&mut self, width: u32, height: u32) -> Result<&Layout, LayoutError> {
        let dashboard = &*self.dashboard;
        let next = dashboard.engine().apply_resize(
            &dashboard.layout,
            &dashboard.breakpoint.name,
            &self.panel_id,
            width,
            height,
            dashboard.edit.mode(),
        )?;
        let cause = ChangeCause::Resized {
            panel_id: self.panel_id.clone(),
        };
        let (layout, _) = self.preview.insert((next, cause));
        Ok(layout)
    }

    /// The latest speculative layout, if any step has been previewed.
    pub fn preview(&self) -> Option<&Layout> {
        self.preview.as_ref().map(|(layout, _)| layout)
    }

    /// The committed layout the gesture started from.
    pub fn committed(&self) -> &Layout {
        self.dashboard.layout()
    }

    /// Commits the latest preview. A gesture that never previewed anything
    /// commits nothing.
    pub fn commit(mut self) -> Result<(), Error> {
        self.finished = true;
        match self.preview.take() {
            Some((layout, cause)) => self.dashboard.commit(layout, cause),
            None => Ok(()),
        }
    }

    /// Discards the gesture.
    pub fn cancel(mut self) {
        self.finished = true;
        tracing::debug!("Gesture on {} cancelled", self.panel_id);
    }
}

impl<T, B> Drop for Gesture<'_, T, B> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Gesture on {} abandoned", self.panel_id);
        }
    }
}
