//! BDD-style testing helpers for Tickmark.
//!
//! Provides `describe`, `it`, nested groups and hook management for
//! expressive component tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use tickmark_test::bdd::*;
//! use tickmark_test::Harness;
//!
//! #[test]
//! fn toggle_input_specs() {
//!     describe_and_assert("ToggleInput", |ctx| {
//!         ctx.it("starts unchecked", |_| {
//!             let harness = Harness::<ToggleInput>::render(ToggleInputProps::new("terms"));
//!             expect(harness.get_by_test_id("checkbox")).not().to_be_checked();
//!         });
//!
//!         ctx.describe("when disabled", |ctx| {
//!             ctx.it("ignores clicks", |_| { /* ... */ });
//!         });
//!     });
//! }
//! ```

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use tickmark_core::NodeRef;

type Hook = Rc<dyn Fn()>;

#[derive(Default)]
struct Tally {
    passed: u32,
    failed: u32,
    failures: Vec<String>,
}

/// Test context for BDD-style tests.
///
/// Nested groups share the parent's tally and inherit its hooks: outer
/// `before_each` hooks run first, outer `after_each` hooks run last.
pub struct TestContext {
    description: String,
    before_hooks: Vec<Hook>,
    after_hooks: Vec<Hook>,
    tally: Rc<RefCell<Tally>>,
}

impl TestContext {
    /// Create a new test context.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            before_hooks: Vec::new(),
            after_hooks: Vec::new(),
            tally: Rc::default(),
        }
    }

    /// Full description, including enclosing groups.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register a hook run before each test in this group.
    pub fn before_each<F: Fn() + 'static>(&mut self, f: F) {
        self.before_hooks.push(Rc::new(f));
    }

    /// Register a hook run after each test in this group, pass or fail.
    pub fn after_each<F: Fn() + 'static>(&mut self, f: F) {
        self.after_hooks.insert(0, Rc::new(f));
    }

    /// Define a nested group.
    pub fn describe<F: FnOnce(&mut TestContext)>(&self, description: &str, f: F) {
        let mut child = Self {
            description: format!("{} {}", self.description, description),
            before_hooks: self.before_hooks.clone(),
            after_hooks: self.after_hooks.clone(),
            tally: Rc::clone(&self.tally),
        };
        f(&mut child);
    }

    /// Define a test case.
    pub fn it<F: Fn(&TestContext)>(&self, description: &str, test: F) {
        for hook in &self.before_hooks {
            hook();
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| test(self)));

        for hook in &self.after_hooks {
            hook();
        }

        let mut tally = self.tally.borrow_mut();
        match result {
            Ok(()) => tally.passed += 1,
            Err(payload) => {
                tally.failed += 1;
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "test panicked".to_string());
                tally
                    .failures
                    .push(format!("{} - {}: {}", self.description, description, reason));
            }
        }
    }

    /// Get passed count.
    pub fn passed(&self) -> u32 {
        self.tally.borrow().passed
    }

    /// Get failed count.
    pub fn failed(&self) -> u32 {
        self.tally.borrow().failed
    }

    /// Get failures.
    pub fn failures(&self) -> Vec<String> {
        self.tally.borrow().failures.clone()
    }

    /// Check if all tests passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Describe a test suite.
pub fn describe<F: FnOnce(&mut TestContext)>(description: &str, f: F) -> TestContext {
    let mut ctx = TestContext::new(description);
    f(&mut ctx);
    ctx
}

/// Run a describe block and assert all tests pass.
pub fn describe_and_assert<F: FnOnce(&mut TestContext)>(description: &str, f: F) {
    let ctx = describe(description, f);
    if !ctx.all_passed() {
        panic!(
            "Test suite '{}' failed: {} passed, {} failed\n{}",
            description,
            ctx.passed(),
            ctx.failed(),
            ctx.failures().join("\n")
        );
    }
}

// =============================================================================
// Expectations API
// =============================================================================

/// Wrapper for making assertions.
pub struct Expectation<T> {
    value: T,
    negated: bool,
}

/// Create an expectation from a value.
pub fn expect<T>(value: T) -> Expectation<T> {
    Expectation {
        value,
        negated: false,
    }
}

impl<T> Expectation<T> {
    /// Negate the expectation.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Panic unless `holds` agrees with the polarity. `what` reads after
    /// "Expected {value} to" / "not to".
    fn check(&self, holds: bool, subject: impl Debug, what: impl std::fmt::Display) {
        if holds == self.negated {
            let polarity = if self.negated { "not to" } else { "to" };
            panic!("Expected {subject:?} {polarity} {what}");
        }
    }
}

impl<T: PartialEq + Debug> Expectation<T> {
    /// Assert equality.
    pub fn to_equal(self, expected: T) {
        self.check(
            self.value == expected,
            &self.value,
            format_args!("equal {expected:?}"),
        );
    }
}

impl Expectation<bool> {
    /// Assert true.
    pub fn to_be_true(self) {
        self.check(self.value, self.value, "be true");
    }

    /// Assert false.
    pub fn to_be_false(self) {
        self.check(!self.value, self.value, "be false");
    }
}

impl<T: Debug> Expectation<Option<T>> {
    /// Assert Some.
    pub fn to_be_some(self) {
        self.check(self.value.is_some(), &self.value, "be Some");
    }

    /// Assert None.
    pub fn to_be_none(self) {
        self.check(self.value.is_none(), &self.value, "be None");
    }
}

impl<T: Debug, E: Debug> Expectation<Result<T, E>> {
    /// Assert Ok.
    pub fn to_be_ok(self) {
        self.check(self.value.is_ok(), &self.value, "be Ok");
    }

    /// Assert Err.
    pub fn to_be_err(self) {
        self.check(self.value.is_err(), &self.value, "be Err");
    }
}

impl<T: Debug> Expectation<Vec<T>> {
    /// Assert length.
    pub fn to_have_length(self, expected: usize) {
        self.check(
            self.value.len() == expected,
            &self.value,
            format_args!("have length {expected}"),
        );
    }

    /// Assert empty.
    pub fn to_be_empty(self) {
        self.check(self.value.is_empty(), &self.value, "be empty");
    }
}

impl Expectation<&str> {
    /// Assert contains.
    pub fn to_contain(self, needle: &str) {
        self.check(
            self.value.contains(needle),
            self.value,
            format_args!("contain {needle:?}"),
        );
    }

    /// Assert empty.
    pub fn to_be_empty(self) {
        self.check(self.value.is_empty(), self.value, "be empty");
    }
}

impl Expectation<String> {
    /// Assert contains.
    pub fn to_contain(self, needle: &str) {
        self.check(
            self.value.contains(needle),
            &self.value,
            format_args!("contain {needle:?}"),
        );
    }

    /// Assert empty.
    pub fn to_be_empty(self) {
        self.check(self.value.is_empty(), &self.value, "be empty");
    }
}

impl Expectation<NodeRef> {
    /// Assert the node is in the committed tree.
    pub fn to_exist(self) {
        self.check(self.value.exists(), &self.value, "exist");
    }

    /// Assert the node's `checked` state is set.
    pub fn to_be_checked(self) {
        self.check(self.value.checked(), &self.value, "be checked");
    }

    /// Assert the node's `disabled` state is set.
    pub fn to_be_disabled(self) {
        self.check(self.value.disabled(), &self.value, "be disabled");
    }

    /// Assert the node's text content.
    pub fn to_have_text(self, expected: &str) {
        let actual = self.value.text();
        self.check(
            actual == expected,
            &self.value,
            format_args!("have text {expected:?}, got {actual:?}"),
        );
    }
}
