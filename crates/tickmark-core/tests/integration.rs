//! Integration tests for tickmark-core.
//!
//! These tests drive a small controlled/uncontrolled component through the
//! public host API end-to-end.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tickmark_core::{
    resolve, Callback, ChangeEvent, Component, Context, Dispatch, Element, HostError,
    LifecycleEvent, LifecycleHooks, LifecyclePhase, Listener, Mount, Source,
};

/// A one-input component with an optional owner-supplied value.
struct Flag {
    on: bool,
}

#[derive(Default)]
struct FlagProps {
    on: Option<bool>,
    on_change: Callback<ChangeEvent>,
}

impl Component for Flag {
    type Props = FlagProps;

    fn create(_: &FlagProps) -> Self {
        Self { on: false }
    }

    fn render(&self, props: &FlagProps) -> Element {
        Element::new("p").child(
            Element::new("input")
                .attr("type", "checkbox")
                .attr("checked", resolve(props.on, self.on).value)
                .attr("data-testid", "flag")
                .listen(Listener::Change),
        )
    }

    fn on_change(&mut self, props: &FlagProps, event: &ChangeEvent, cx: &mut Context) {
        if props.on.is_some() {
            props.on_change.emit(event);
        } else {
            self.on = event.checked();
            let cb = props.on_change.clone();
            let event = event.clone();
            cx.after_commit(move || cb.emit(&event));
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_resolve_reports_source() {
    assert_eq!(resolve(Some(false), true).source, Source::External);
    assert_eq!(resolve(None, true).source, Source::Internal);
    assert!(resolve(None, true).value);
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_controlled_value_is_restored_on_commit() {
    let mut mount = Mount::<Flag>::new(FlagProps {
        on: Some(false),
        ..FlagProps::default()
    });
    let input = mount.dom().find_by_test_id("flag").unwrap();

    assert_eq!(mount.click("flag"), Ok(Dispatch::Changed));
    assert!(!input.checked());
    assert!(!mount.instance().on);
}

#[test]
fn test_owner_mount_follows_owner_state() {
    let state = Rc::new(Cell::new(false));
    let owner_state = Rc::clone(&state);
    let mut mount = Mount::<Flag>::owned(move || {
        let sink = Rc::clone(&owner_state);
        FlagProps {
            on: Some(owner_state.get()),
            on_change: Callback::new(move |e: &ChangeEvent| sink.set(e.checked())),
        }
    });

    assert_eq!(mount.click("flag"), Ok(Dispatch::Changed));
    assert!(state.get());
    assert!(mount.dom().find_by_test_id("flag").unwrap().checked());
}

#[test]
fn test_missing_target_is_an_error() {
    let mut mount = Mount::<Flag>::new(FlagProps::default());
    assert_eq!(
        mount.click("nope"),
        Err(HostError::ElementNotFound {
            test_id: "nope".to_string()
        })
    );
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_lifecycle_phases_in_order() {
    let phases = Rc::new(RefCell::new(Vec::new()));
    let mut hooks = LifecycleHooks::new();
    let sink = Rc::clone(&phases);
    hooks.register(
        vec![
            LifecyclePhase::Mount,
            LifecyclePhase::Update,
            LifecyclePhase::Unmount,
        ],
        move |e: &LifecycleEvent| sink.borrow_mut().push((e.phase, e.commit)),
    );

    let mut mount = Mount::<Flag>::with_hooks(FlagProps::default(), hooks);
    assert_eq!(mount.click("flag"), Ok(Dispatch::Changed));
    let input = mount.dom().find_by_test_id("flag").unwrap();
    mount.unmount();

    assert!(!input.exists());
    assert_eq!(
        *phases.borrow(),
        [
            (LifecyclePhase::Mount, 1),
            (LifecyclePhase::Update, 2),
            (LifecyclePhase::Unmount, 2),
        ]
    );
}
