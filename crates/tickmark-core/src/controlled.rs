//! Controlled versus uncontrolled attribute ownership.
//!
//! An attribute is *controlled* for a render when the props explicitly
//! supply its current value. Otherwise the component's own memory is
//! authoritative. Presence is what counts: an explicit `false` controls just
//! as much as an explicit `true`.
//!
//! # Examples
//!
//! ```
//! use tickmark_core::{resolve, Source};
//!
//! // Owner supplies a value: it wins, even when falsy.
//! let r = resolve(Some(false), true);
//! assert_eq!((r.value, r.source), (false, Source::External));
//!
//! // Nothing supplied: the component's memory is used.
//! let r = resolve(None, true);
//! assert_eq!((r.value, r.source), (true, Source::Internal));
//! ```

use serde::{Deserialize, Serialize};

/// Where a render took an attribute's value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Supplied by the owner through props
    External,
    /// Held in the component's own memory
    Internal,
}

impl Source {
    /// Whether the owner drives the value.
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::External)
    }
}

/// A resolved attribute value and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Value to render
    pub value: T,
    /// Where it came from
    pub source: Source,
}

/// Pick the supplied value if present, else the component's memory.
///
/// Only reads `memory`; callers must not write the supplied value back into
/// their own state, so an owner that stops supplying a value hands control
/// back to the component's independent history.
pub fn resolve<T>(supplied: Option<T>, memory: T) -> Resolved<T> {
    match supplied {
        Some(value) => Resolved {
            value,
            source: Source::External,
        },
        None => Resolved {
            value: memory,
            source: Source::Internal,
        },
    }
}

/// Props that can report which of their attributes were explicitly given.
pub trait Controlled {
    /// Names the props' attributes.
    type Prop: Copy + std::fmt::Debug;

    /// Whether `prop` was explicitly supplied for this render.
    fn is_controlled(&self, prop: Self::Prop) -> bool;

    /// Source a render should use for `prop`.
    fn source(&self, prop: Self::Prop) -> Source {
        if self.is_controlled(prop) {
            Source::External
        } else {
            Source::Internal
        }
    }
}
