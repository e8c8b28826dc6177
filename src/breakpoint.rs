//! Viewport-width breakpoints.
//!
//! A [`BreakpointTable`] is an ordered list of `(name, min_width, columns)`
//! entries sorted widest first. [`BreakpointTable::resolve`] returns the first
//! entry whose minimum width does not exceed the viewport width.
//!
//! # Invariants
//!
//! 1. The table is never empty.
//! 2. Minimum widths are strictly descending and the last one is `0`, so
//!    every width resolves.
//! 3. Names are unique and every entry has at least one column.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BreakpointError;

/// A named viewport-width tier with its column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Tier name used as the layout map key (e.g. `"lg"`).
    pub name: String,
    /// Smallest viewport width in pixels that selects this tier.
    pub min_width: u32,
    /// Number of grid columns at this tier.
    pub columns: u32,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min_width: u32, columns: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
            columns,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (>= {}px, {} columns)",
            self.name, self.min_width, self.columns
        )
    }
}

/// Validated, widest-first breakpoint table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Validates and wraps a table.
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self, BreakpointError> {
        let last = entries.last().ok_or(BreakpointError::Empty)?;
        if last.min_width != 0 {
            return Err(BreakpointError::MissingZeroFloor {
                name: last.name.clone(),
                min_width: last.min_width,
            });
        }

        let mut seen = HashSet::new();
        let mut previous: Option<&Breakpoint> = None;
        for bp in &entries {
            if !seen.insert(bp.name.as_str()) {
                return Err(BreakpointError::DuplicateName(bp.name.clone()));
            }
            if bp.columns == 0 {
                return Err(BreakpointError::ZeroColumns(bp.name.clone()));
            }
            if let Some(prev) = previous {
                if bp.min_width >= prev.min_width {
                    return Err(BreakpointError::NotDescending {
                        name: bp.name.clone(),
                        min_width: bp.min_width,
                        previous: prev.min_width,
                    });
                }
            }
            previous = Some(bp);
        }

        Ok(Self { entries })
    }

    /// Returns the breakpoint for a viewport width.
    pub fn resolve(&self, viewport_width: u32) -> &Breakpoint {
        let floor = self.entries.len() - 1;
        self.entries
            .iter()
            .find(|bp| bp.min_width <= viewport_width)
            // Unreachable in practice: the last entry has min width 0.
            .unwrap_or(&self.entries[floor])
    }

    /// Looks up a breakpoint by name.
    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries.iter().find(|bp| bp.name == name)
    }

    /// Column count for a named breakpoint.
    pub fn columns(&self, name: &str) -> Option<u32> {
        self.get(name).map(|bp| bp.columns)
    }

    /// Iterates breakpoints widest first.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|bp| bp.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BreakpointTable {
    /// `lg >= 1200 (12)`, `md >= 996 (12)`, `sm >= 768 (6)`, `xs >= 480 (4)`,
    /// `xxs >= 0 (2)`.
    fn default() -> Self {
        Self {
            entries: vec![
                Breakpoint::new("lg", 1200, 12),
                Breakpoint::new("md", 996, 12),
                Breakpoint::new("sm", 768, 6),
                Breakpoint::new("xs", 480, 4),
                Breakpoint::new("xxs", 0, 2),
            ],
        }
    }
}
