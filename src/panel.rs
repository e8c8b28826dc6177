//! Panels and the ordered panel registry.
//!
//! A [`Panel`] is an opaque, identifier-addressed block of dashboard content.
//! The engine reads only its identifier, size constraints and lock flag; the
//! content handle `T` belongs to the view layer and is never inspected.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Optional size limits for a panel, in grid units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConstraints {
    /// Minimum width in columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    /// Minimum height in rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    /// Maximum width in columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    /// Maximum height in rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
}

impl PanelConstraints {
    /// Clamps `width` into the declared range and onto a grid of `columns`.
    ///
    /// The grid always wins: a minimum wider than the grid is reduced to the
    /// column count. A maximum below the minimum is ignored.
    pub fn clamp_width(&self, width: u32, columns: u32) -> u32 {
        let columns = columns.max(1);
        let lower = self.min_width.unwrap_or(1).clamp(1, columns);
        let upper = self.max_width.unwrap_or(columns).min(columns).max(lower);
        width.clamp(lower, upper)
    }

    /// Clamps `height` into the declared range (never below one row).
    pub fn clamp_height(&self, height: u32) -> u32 {
        let lower = self.min_height.unwrap_or(1).max(1);
        let upper = self.max_height.unwrap_or(u32::MAX).max(lower);
        height.clamp(lower, upper)
    }
}

/// A unit of grid-placed content.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    id: String,
    constraints: PanelConstraints,
    locked: bool,
    content: T,
}

impl<T> Panel<T> {
    /// Creates an unlocked, unconstrained panel.
    pub fn new(id: impl Into<String>, content: T) -> Self {
        Self {
            id: id.into(),
            constraints: PanelConstraints::default(),
            locked: false,
            content,
        }
    }

    /// Sets the minimum size (builder pattern).
    #[must_use]
    pub fn min_size(mut self, width: u32, height: u32) -> Self {
        self.constraints.min_width = Some(width);
        self.constraints.min_height = Some(height);
        self
    }

    /// Sets the maximum size (builder pattern).
    #[must_use]
    pub fn max_size(mut self, width: u32, height: u32) -> Self {
        self.constraints.max_width = Some(width);
        self.constraints.max_height = Some(height);
        self
    }

    /// Replaces all constraints (builder pattern).
    #[must_use]
    pub fn with_constraints(mut self, constraints: PanelConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Pins the panel so drag and resize are rejected (builder pattern).
    #[must_use]
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn constraints(&self) -> &PanelConstraints {
        &self.constraints
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The opaque content handle supplied by the view layer.
    pub fn content(&self) -> &T {
        &self.content
    }
}

/// Ordered collection of panels with unique identifiers.
///
/// Registration order is preserved and used when a panel has to be placed
/// without a saved or default position.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRegistry<T> {
    panels: Vec<Panel<T>>,
}

impl<T> PanelRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    /// Builds a registry from panels in order.
    ///
    /// Fails with [`LayoutError::DuplicatePanel`] on the first repeated id.
    pub fn from_panels(panels: impl IntoIterator<Item = Panel<T>>) -> Result<Self, LayoutError> {
        let mut registry = Self::new();
        for panel in panels {
            registry.register(panel)?;
        }
        Ok(registry)
    }

    /// Appends a panel.
    pub fn register(&mut self, panel: Panel<T>) -> Result<(), LayoutError> {
        if self.contains(panel.id()) {
            return Err(LayoutError::DuplicatePanel {
                panel_id: panel.id().to_string(),
            });
        }
        self.panels.push(panel);
        Ok(())
    }

    /// Looks up a panel by identifier.
    pub fn get(&self, id: &str) -> Option<&Panel<T>> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates panels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Panel<T>> {
        self.panels.iter()
    }

    /// Iterates panel identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|p| p.id())
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl<T> Default for PanelRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
