//! Edit-mode state machine.
//!
//! The dashboard starts `Locked`. Only an explicit user toggle switches
//! modes; there is no timeout. Drag and resize are accepted only while
//! `Unlocked`. Locking never saves: every committed change is already
//! persisted.

use std::fmt;

/// Whether the layout currently accepts drag/resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Layout is fixed; drag handles are hidden.
    #[default]
    Locked,
    /// Layout can be rearranged.
    Unlocked,
}

impl EditMode {
    /// Returns `true` if geometry mutations are accepted in this mode.
    pub fn allows_mutation(self) -> bool {
        matches!(self, EditMode::Unlocked)
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Locked => EditMode::Unlocked,
            EditMode::Unlocked => EditMode::Locked,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EditMode::Locked => "locked",
            EditMode::Unlocked => "unlocked",
        };
        write!(f, "{}", s)
    }
}

/// Tracks the edit mode and whether editing is allowed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModeController {
    mode: EditMode,
    editable: bool,
}

impl EditModeController {
    /// Creates an editable controller in the `Locked` state.
    pub fn new() -> Self {
        Self {
            mode: EditMode::Locked,
            editable: true,
        }
    }

    /// Creates a controller that stays `Locked` forever.
    pub fn read_only() -> Self {
        Self {
            mode: EditMode::Locked,
            editable: false,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Flips the mode and returns the new one.
    ///
    /// A read-only controller ignores the toggle and stays `Locked`.
    pub fn toggle(&mut self) -> EditMode {
        if self.editable {
            self.mode = self.mode.toggled();
            tracing::debug!("Edit mode is now {}", self.mode);
        } else {
            tracing::debug!("Ignoring edit toggle on a read-only dashboard");
        }
        self.mode
    }

    /// Switches to `Unlocked`. Returns `false` on a read-only controller.
    pub fn unlock(&mut self) -> bool {
        if self.editable {
            self.mode = EditMode::Unlocked;
        }
        self.editable
    }

    /// Switches to `Locked`.
    pub fn lock(&mut self) {
        self.mode = EditMode::Locked;
    }
}

impl Default for EditModeController {
    fn default() -> Self {
        Self::new()
    }
}
