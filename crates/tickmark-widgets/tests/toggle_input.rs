//! Behavioral tests for `ToggleInput` driven through the test harness.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use proptest::prelude::*;
use tickmark_core::{ChangeEvent, Dispatch, Element, Event, Key};
use tickmark_test::{describe_and_assert, expect, Harness, Snapshot};
use tickmark_widgets::{ToggleInput, ToggleInputConfig, ToggleInputProps, TOGGLE_INPUT_TEST_ID};

const INPUT: &str = "[data-testid='checkbox']";

fn all_props() -> ToggleInputProps {
    ToggleInputProps::new("checkbox")
        .label("Some label")
        .container_class_name("container-class-name")
        .icon_class_name("icon-class-name")
        .label_class_name("label-class-name")
        .default_is_checked(true)
        .on_change(|_: &ChangeEvent| {})
        .disabled(true)
        .icon(Element::new("span").child("Some icon"))
}

/// Owner that keeps `is_checked` in its own state and copies the input's
/// `checked` back in its handler.
fn following_owner(state: &Rc<Cell<bool>>) -> impl Fn() -> ToggleInputProps {
    let state = Rc::clone(state);
    move || {
        let sink = Rc::clone(&state);
        ToggleInputProps::new("checkbox")
            .label("Some label")
            .is_checked(state.get())
            .on_change(move |e: &ChangeEvent| sink.set(e.current_target().checked()))
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_renders_by_default() {
    let harness = Harness::<ToggleInput>::render(ToggleInputProps::new("some-name"));

    Snapshot::assert_match("toggle_input_default", &harness.pretty());
    harness
        .assert_count("label > span", 0)
        .assert_checked(INPUT, false);
}

#[test]
fn test_renders_with_all_props() {
    let harness = Harness::<ToggleInput>::render(all_props());

    Snapshot::assert_match("toggle_input_all_props", &harness.pretty());
    assert_eq!(
        harness.html(),
        "<label class=\"container-class-name\">\
         <input checked=\"\" data-testid=\"checkbox\" disabled=\"\" name=\"checkbox\" type=\"checkbox\"/>\
         <span class=\"icon-class-name\"><span>Some icon</span></span>\
         <span class=\"label-class-name\">Some label</span>\
         </label>"
    );
}

#[test]
fn test_empty_label_is_not_rendered() {
    let harness = Harness::<ToggleInput>::render(ToggleInputProps::new("x").label(""));
    harness.assert_not_exists("label > span");
}

#[test]
fn test_icon_without_class_renders_bare_span() {
    let harness = Harness::<ToggleInput>::render(ToggleInputProps::new("x").icon("*"));
    harness.assert_count("label > span", 1).assert_text("label > span", "*");
    assert!(harness.get("label > span").attr("class").is_none());
}

// =============================================================================
// Controlled mode
// =============================================================================

#[test]
fn test_controlled_follows_owner_state() {
    let state = Rc::new(Cell::new(false));
    let mut harness = Harness::<ToggleInput>::render_owned(following_owner(&state));

    harness.click(INPUT);
    assert!(state.get());
    harness.assert_checked(INPUT, true);

    harness.click(INPUT);
    assert!(!state.get());
    harness.assert_checked(INPUT, false);

    assert!(!harness.mount().instance().memory().is_checked);
}

#[test]
fn test_controlled_owner_that_ignores_change_keeps_value() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut harness = Harness::<ToggleInput>::render(
        ToggleInputProps::new("checkbox")
            .is_checked(false)
            .on_change(move |e: &ChangeEvent| sink.borrow_mut().push(e.checked())),
    );

    harness.click(INPUT).click(INPUT);

    harness.assert_checked(INPUT, false);
    assert_eq!(*seen.borrow(), [true, true]);
}

#[test]
fn test_controlled_false_wins_over_default() {
    let mut harness = Harness::<ToggleInput>::render(
        ToggleInputProps::new("checkbox")
            .default_is_checked(true)
            .is_checked(false),
    );
    harness.assert_checked(INPUT, false);

    harness.click(INPUT);
    harness.assert_checked(INPUT, false);
    assert!(harness.mount().instance().memory().is_checked);
}

#[test]
fn test_switching_modes_keeps_memory() {
    let mut harness = Harness::<ToggleInput>::render(ToggleInputProps::new("checkbox"));
    harness.click(INPUT);
    harness.assert_checked(INPUT, true);

    harness.rerender(ToggleInputProps::new("checkbox").is_checked(false));
    harness.assert_checked(INPUT, false);

    harness.rerender(ToggleInputProps::new("checkbox"));
    harness.assert_checked(INPUT, true);
}

// =============================================================================
// Uncontrolled mode
// =============================================================================

#[test]
fn test_uncontrolled_calls_on_change_with_target() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut harness = Harness::<ToggleInput>::render(
        ToggleInputProps::new("checkbox")
            .label("Some label")
            .on_change(move |e: &ChangeEvent| {
                sink.borrow_mut().push((
                    e.checked(),
                    e.current_target().exists(),
                    e.current_target().checked(),
                    e.name().map(str::to_string),
                ));
            }),
    );

    harness.click(INPUT);
    assert_eq!(seen.borrow().len(), 1);
    harness.click(INPUT);

    assert_eq!(
        *seen.borrow(),
        [
            (true, true, true, Some("checkbox".to_string())),
            (false, true, false, Some("checkbox".to_string())),
        ]
    );
}

#[test]
fn test_uncontrolled_starts_from_default() {
    let mut harness = Harness::<ToggleInput>::render(
        ToggleInputProps::new("checkbox").default_is_checked(true),
    );
    harness.assert_checked(INPUT, true);
    harness.click(INPUT);
    harness.assert_checked(INPUT, false);
}

#[test]
fn test_default_is_read_only_at_creation() {
    let mut harness = Harness::<ToggleInput>::render(ToggleInputProps::new("checkbox"));
    harness.rerender(ToggleInputProps::new("checkbox").default_is_checked(true));
    harness.assert_checked(INPUT, false);
}

#[test]
fn test_works_without_on_change() {
    let mut harness =
        Harness::<ToggleInput>::render(ToggleInputProps::new("checkbox").label("Some label"));

    harness.click(INPUT);
    harness.assert_checked(INPUT, true);

    harness.click(INPUT);
    harness.assert_checked(INPUT, false);
}

#[test]
fn test_space_toggles_and_enter_does_not() {
    let mut harness = Harness::<ToggleInput>::render(ToggleInputProps::new("checkbox"));

    harness.press_space(INPUT);
    harness.assert_checked(INPUT, true);

    assert_eq!(harness.press(INPUT, Key::Enter), Dispatch::Ignored);
    harness.assert_checked(INPUT, true);
}

// =============================================================================
// Disabled
// =============================================================================

#[test]
fn test_disabled_ignores_input() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut harness = Harness::<ToggleInput>::render(
        ToggleInputProps::new("checkbox")
            .disabled(true)
            .on_change(move |_: &ChangeEvent| counter.set(counter.get() + 1)),
    );

    assert_eq!(harness.fire(INPUT, Event::Click), Dispatch::Ignored);
    assert_eq!(harness.press(INPUT, Key::Space), Dispatch::Ignored);

    harness.assert_checked(INPUT, false);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_renders_from_yaml_config() {
    let config = ToggleInputConfig::from_yaml(
        "name: newsletter\nlabel: Send me news\ncontainer_class_name: field\nis_checked: true\n",
    )
    .unwrap();
    let mut harness = Harness::<ToggleInput>::render(config.into_props());

    harness
        .assert_exists(".field > [name='newsletter']")
        .assert_text("label > span", "Send me news")
        .assert_checked(INPUT, true);

    harness.click(INPUT);
    harness.assert_checked(INPUT, true);
}

// =============================================================================
// BDD
// =============================================================================

#[test]
fn test_toggle_input_behaviour() {
    describe_and_assert("ToggleInput", |ctx| {
        let mounted = Rc::new(Cell::new(0));
        let counter = Rc::clone(&mounted);
        ctx.before_each(move || counter.set(counter.get() + 1));

        ctx.it("exposes the input by test id", |_| {
            let harness = Harness::<ToggleInput>::render(ToggleInputProps::new("terms"));
            let input = harness.get_by_test_id(TOGGLE_INPUT_TEST_ID);
            expect(input.attr_str("name")).to_equal(Some("terms".to_string()));
            expect(input).not().to_be_checked();
        });

        ctx.describe("in controlled mode", |ctx| {
            ctx.it("shows what the owner supplies", |_| {
                let state = Rc::new(Cell::new(true));
                let mut harness = Harness::<ToggleInput>::render_owned(following_owner(&state));
                expect(harness.get(INPUT)).to_be_checked();
                harness.click(INPUT);
                expect(harness.get(INPUT)).not().to_be_checked();
                expect(state.get()).to_be_false();
            });
        });

        ctx.describe("when disabled", |ctx| {
            ctx.it("renders the disabled flag", |_| {
                let harness =
                    Harness::<ToggleInput>::render(ToggleInputProps::new("x").disabled(true));
                expect(harness.get(INPUT)).to_be_disabled();
            });
        });

        ctx.it("ran hooks for every test", move |_| {
            expect(mounted.get()).to_equal(4);
        });
    });
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #[test]
    fn prop_uncontrolled_flips_once_per_click(start in any::<bool>(), clicks in 0usize..12) {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let mut harness = Harness::<ToggleInput>::render(
            ToggleInputProps::new("checkbox")
                .default_is_checked(start)
                .on_change(move |_: &ChangeEvent| counter.set(counter.get() + 1)),
        );

        for _ in 0..clicks {
            harness.click(INPUT);
        }

        prop_assert_eq!(harness.get(INPUT).checked(), start ^ (clicks % 2 == 1));
        prop_assert_eq!(calls.get(), clicks);
    }

    #[test]
    fn prop_controlled_never_moves_without_owner(value in any::<bool>(), clicks in 0usize..12) {
        let mut harness = Harness::<ToggleInput>::render(
            ToggleInputProps::new("checkbox").is_checked(value),
        );

        for _ in 0..clicks {
            harness.click(INPUT);
        }

        prop_assert_eq!(harness.get(INPUT).checked(), value);
        prop_assert!(!harness.mount().instance().memory().is_checked);
    }
}
