//! Error types for tickmark-core.

use thiserror::Error;

/// Errors raised while dispatching input through a mount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// No element carries the requested test ID.
    #[error("no element with data-testid '{test_id}'")]
    ElementNotFound {
        /// The test ID that was looked up.
        test_id: String,
    },

    /// The node reference no longer resolves in the committed tree.
    #[error("element at {path:?} is not mounted")]
    Detached {
        /// Child-index path of the stale reference.
        path: Vec<usize>,
    },

    /// The node reference belongs to another mount's tree.
    #[error("element at {path:?} belongs to another mount")]
    ForeignNode {
        /// Child-index path of the foreign reference.
        path: Vec<usize>,
    },

    /// The element exists but nothing is listening for changes on it.
    #[error("<{tag}> has no change listener")]
    NoListener {
        /// Tag of the target element.
        tag: String,
    },
}
