//! Input events and the change event delivered to handlers.

use crate::dom::NodeRef;
use serde::{Deserialize, Serialize};

/// User input dispatched at an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Primary-button click
    Click,
    /// Key pressed while the element has focus
    KeyDown {
        /// Key pressed
        key: Key,
    },
}

impl Event {
    /// Whether this input flips a native checkbox.
    #[must_use]
    pub const fn toggles_checkbox(&self) -> bool {
        matches!(self, Self::Click | Self::KeyDown { key: Key::Space })
    }
}

/// Keyboard keys relevant to form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Space bar
    Space,
    /// Enter/Return
    Enter,
    /// Tab
    Tab,
    /// Escape
    Escape,
}

/// Change event raised by a form control after its native toggle.
///
/// `current_target` is live: reading it inside a deferred callback shows the
/// committed tree, not the tree at dispatch time.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    current_target: NodeRef,
    name: Option<String>,
    checked: bool,
}

impl ChangeEvent {
    /// Create a change event for `current_target` carrying the new value.
    #[must_use]
    pub const fn new(current_target: NodeRef, name: Option<String>, checked: bool) -> Self {
        Self {
            current_target,
            name,
            checked,
        }
    }

    /// The control that changed.
    #[must_use]
    pub const fn current_target(&self) -> &NodeRef {
        &self.current_target
    }

    /// The control's `name` at dispatch time.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Checked value produced by the native toggle.
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.checked
    }
}
