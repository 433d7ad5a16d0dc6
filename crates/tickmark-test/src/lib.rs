#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::manual_assert)]
#![allow(clippy::needless_pass_by_value)]
//! Testing harness for Tickmark components.
//!
//! Render a component, query its committed markup with selectors, simulate
//! clicks and key presses, and compare against text snapshots.
//!
//! ```ignore
//! use tickmark_test::Harness;
//! use tickmark_widgets::{ToggleInput, ToggleInputProps};
//!
//! #[test]
//! fn test_toggle_input() {
//!     let mut harness = Harness::<ToggleInput>::render(ToggleInputProps::new("terms"));
//!     harness.click("[data-testid='checkbox']");
//!     harness.assert_checked("input", true);
//! }
//! ```

pub mod bdd;
mod harness;
mod selector;
mod snapshot;

pub use bdd::{describe, describe_and_assert, expect, Expectation, TestContext};
pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
pub use snapshot::{pretty, Snapshot};
