//! Test harness for Tickmark components.
//!
//! Renders a component into a [`Mount`], queries the committed tree with
//! CSS-like selectors and simulates user input. Dropping the harness
//! unmounts the component.

use tickmark_core::{Component, Dispatch, Event, Key, Mount, NodeRef};

use crate::selector::Selector;
use crate::snapshot::pretty;

/// Test harness for interacting with a mounted component.
pub struct Harness<C: Component> {
    mount: Option<Mount<C>>,
}

impl<C: Component> Harness<C> {
    /// Render a component with fixed props.
    pub fn render(props: C::Props) -> Self {
        Self {
            mount: Some(Mount::new(props)),
        }
    }

    /// Render a component whose props come from an owner closure.
    ///
    /// The owner is asked for props again after every dispatched event.
    pub fn render_owned(owner: impl Fn() -> C::Props + 'static) -> Self {
        Self {
            mount: Some(Mount::owned(owner)),
        }
    }

    /// The underlying mount.
    ///
    /// # Panics
    ///
    /// Panics after [`cleanup`](Self::cleanup).
    #[must_use]
    pub fn mount(&self) -> &Mount<C> {
        self.mount
            .as_ref()
            .unwrap_or_else(|| panic!("{} is no longer mounted", C::name()))
    }

    fn mount_mut(&mut self) -> &mut Mount<C> {
        self.mount
            .as_mut()
            .unwrap_or_else(|| panic!("{} is no longer mounted", C::name()))
    }

    /// Re-render with new props.
    pub fn rerender(&mut self, props: C::Props) -> &mut Self {
        self.mount_mut().set_props(props);
        self
    }

    /// Unmount the component. Later queries find nothing.
    pub fn cleanup(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount.unmount();
        }
    }

    // === Event Simulation ===

    /// Simulate a click on the first element matching the selector.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or the element cannot take the event.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        let _ = self.fire(selector, Event::Click);
        self
    }

    /// Simulate pressing Space on the first element matching the selector.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or the element cannot take the event.
    pub fn press_space(&mut self, selector: &str) -> &mut Self {
        let _ = self.press(selector, Key::Space);
        self
    }

    /// Simulate a key press and report whether it changed anything.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or the element cannot take the event.
    pub fn press(&mut self, selector: &str, key: Key) -> Dispatch {
        self.fire(selector, Event::KeyDown { key })
    }

    /// Dispatch an event at the first element matching the selector.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or the element cannot take the event.
    pub fn fire(&mut self, selector: &str, event: Event) -> Dispatch {
        let target = self.get(selector);
        match self.mount_mut().dispatch_at(&target, event) {
            Ok(outcome) => outcome,
            Err(err) => panic!("Could not dispatch {event:?} at '{selector}': {err}"),
        }
    }

    // === Queries ===

    /// Query for the first element matching the selector.
    ///
    /// # Panics
    ///
    /// Panics if the selector does not parse.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<NodeRef> {
        self.query_all(selector).into_iter().next()
    }

    /// Query for all elements matching the selector, in document order.
    ///
    /// # Panics
    ///
    /// Panics if the selector does not parse.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<NodeRef> {
        let sel = parse(selector);
        match &self.mount {
            Some(mount) => mount
                .dom()
                .find_all_in_tree(|root, path| sel.matches_at(root, path)),
            None => Vec::new(),
        }
    }

    /// Get the first element matching the selector.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches.
    #[must_use]
    pub fn get(&self, selector: &str) -> NodeRef {
        self.query(selector)
            .unwrap_or_else(|| panic!("Expected an element matching '{selector}'"))
    }

    /// Get the element with the given `data-testid`.
    ///
    /// # Panics
    ///
    /// Panics if there is none.
    #[must_use]
    pub fn get_by_test_id(&self, test_id: &str) -> NodeRef {
        self.mount()
            .dom()
            .find_by_test_id(test_id)
            .unwrap_or_else(|| panic!("Expected an element with data-testid '{test_id}'"))
    }

    /// Text content of the first matching element, or empty.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector).map(|node| node.text()).unwrap_or_default()
    }

    /// Check if an element exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Markup of the committed tree.
    #[must_use]
    pub fn html(&self) -> String {
        self.mount.as_ref().map(Mount::html).unwrap_or_default()
    }

    /// Indented markup of the committed tree, for snapshots.
    #[must_use]
    pub fn pretty(&self) -> String {
        self.mount
            .as_ref()
            .and_then(|mount| mount.dom().snapshot())
            .map(|root| pretty(&root))
            .unwrap_or_default()
    }

    // === Assertions ===

    /// Assert that an element exists.
    ///
    /// # Panics
    ///
    /// Panics if the element does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected element matching '{selector}' to exist"
        );
        self
    }

    /// Assert that an element does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the element exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected element matching '{selector}' to not exist"
        );
        self
    }

    /// Assert the count of matching elements.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} elements matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert the `checked` state of the first matching element.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or the state differs.
    pub fn assert_checked(&self, selector: &str, expected: bool) -> &Self {
        let actual = self.get(selector).checked();
        assert_eq!(
            actual, expected,
            "Expected '{selector}' to have checked={expected} but got {actual}"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }
}

impl<C: Component> Drop for Harness<C> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

impl<C: Component> std::fmt::Debug for Harness<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("mount", &self.mount)
            .finish()
    }
}

fn parse(selector: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|err| panic!("Invalid selector '{selector}': {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tickmark_core::{Callback, ChangeEvent, Context, Element, LifecyclePhase, Listener};

    // Mock component: a labelled switch with remembered state.
    struct Switch {
        on: bool,
    }

    #[derive(Default)]
    struct SwitchProps {
        label: &'static str,
        disabled: bool,
        on_change: Callback<ChangeEvent>,
    }

    impl Component for Switch {
        type Props = SwitchProps;

        fn create(_: &SwitchProps) -> Self {
            Self { on: false }
        }

        fn render(&self, props: &SwitchProps) -> Element {
            Element::new("label")
                .attr("class", "switch")
                .child(
                    Element::new("input")
                        .attr("id", "sw")
                        .attr("type", "checkbox")
                        .attr("checked", self.on)
                        .attr("disabled", props.disabled)
                        .attr("data-testid", "switch")
                        .listen(Listener::Change),
                )
                .child(Element::new("span").child(props.label))
        }

        fn on_change(&mut self, props: &SwitchProps, event: &ChangeEvent, _: &mut Context) {
            self.on = event.checked();
            props.on_change.emit(event);
        }
    }

    fn labelled(label: &'static str) -> SwitchProps {
        SwitchProps {
            label,
            ..SwitchProps::default()
        }
    }

    #[test]
    fn test_render_and_query() {
        let harness = Harness::<Switch>::render(labelled("Dark mode"));

        harness
            .assert_exists("[data-testid='switch']")
            .assert_exists("label > input")
            .assert_exists(".switch span")
            .assert_not_exists("button")
            .assert_count("span", 1)
            .assert_text("span", "Dark mode")
            .assert_checked("#sw", false);
    }

    #[test]
    #[should_panic(expected = "Invalid selector")]
    fn test_invalid_selector_panics() {
        let harness = Harness::<Switch>::render(labelled("x"));
        let _ = harness.exists("label > *");
    }

    #[test]
    fn test_click_toggles() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut harness = Harness::<Switch>::render(SwitchProps {
            on_change: Callback::new(move |_| counter.set(counter.get() + 1)),
            ..labelled("x")
        });

        harness.click("input");
        harness.assert_checked("input", true);
        harness.press_space("input");
        harness.assert_checked("input", false);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_press_non_toggling_key() {
        let mut harness = Harness::<Switch>::render(labelled("x"));
        assert_eq!(harness.press("input", Key::Enter), Dispatch::Ignored);
        harness.assert_checked("input", false);
    }

    #[test]
    fn test_disabled_click_is_ignored() {
        let mut harness = Harness::<Switch>::render(SwitchProps {
            disabled: true,
            ..labelled("x")
        });
        assert_eq!(harness.fire("input", Event::Click), Dispatch::Ignored);
        harness.assert_checked("input", false);
    }

    #[test]
    #[should_panic(expected = "has no change listener")]
    fn test_click_without_listener_panics() {
        let mut harness = Harness::<Switch>::render(labelled("x"));
        harness.click("span");
    }

    #[test]
    #[should_panic(expected = "Expected an element matching 'button'")]
    fn test_click_missing_panics() {
        let mut harness = Harness::<Switch>::render(labelled("x"));
        harness.click("button");
    }

    #[test]
    fn test_rerender_keeps_instance_state() {
        let mut harness = Harness::<Switch>::render(labelled("Before"));
        harness.click("input");
        harness.rerender(labelled("After"));

        harness.assert_text("span", "After").assert_checked("input", true);
    }

    #[test]
    fn test_render_owned_refreshes_props() {
        let label = Rc::new(Cell::new("first"));
        let source = Rc::clone(&label);
        let mut harness = Harness::<Switch>::render_owned(move || labelled(source.get()));
        harness.assert_text("span", "first");

        label.set("second");
        harness.click("input");
        harness.assert_text("span", "second");
    }

    #[test]
    fn test_get_by_test_id() {
        let harness = Harness::<Switch>::render(labelled("x"));
        let node = harness.get_by_test_id("switch");
        assert_eq!(node.tag().as_deref(), Some("input"));
    }

    #[test]
    fn test_html_and_pretty() {
        let harness = Harness::<Switch>::render(labelled("x"));
        assert!(harness.html().starts_with("<label class=\"switch\">"));
        assert!(harness.pretty().starts_with("<label class=\"switch\">\n  <input"));
    }

    #[test]
    fn test_cleanup_unmounts() {
        let unmounted = Rc::new(Cell::new(false));
        let flag = Rc::clone(&unmounted);
        let mut harness = Harness::<Switch>::render(labelled("x"));
        let node = harness.get("input");
        harness
            .mount_mut()
            .hooks_mut()
            .on_unmount(move |event| flag.set(event.phase == LifecyclePhase::Unmount));

        harness.cleanup();

        assert!(unmounted.get());
        assert!(!node.exists());
        assert!(!harness.exists("input"));
        assert_eq!(harness.html(), "");
        harness.cleanup();
    }

    #[test]
    fn test_drop_unmounts() {
        let node = {
            let harness = Harness::<Switch>::render(labelled("x"));
            harness.get("input")
        };
        assert!(!node.exists());
    }
}
