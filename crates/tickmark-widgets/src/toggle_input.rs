//! Checkbox input that is either owner-controlled or self-managed.
//!
//! [`ToggleInput`] renders a label-wrapped checkbox. Whether the `checked`
//! value it shows comes from its own memory or from its owner is decided on
//! every render by [`ToggleInputProps::is_controlled`]:
//!
//! - **Uncontrolled**: no [`is_checked`](ToggleInputProps::is_checked) in
//!   props. The component starts from
//!   [`default_is_checked`](ToggleInputProps::default_is_checked) and flips
//!   its memory on each toggle.
//! - **Controlled**: props carry `is_checked`, even `false`. The component
//!   never touches its memory and only reports the toggle to
//!   [`on_change`](ToggleInputProps::on_change); the owner decides what shows.
//!
//! # Examples
//!
//! ```
//! use tickmark_core::{Dispatch, Mount};
//! use tickmark_widgets::{ToggleInput, ToggleInputProps, TOGGLE_INPUT_TEST_ID};
//!
//! let mut mount = Mount::<ToggleInput>::new(
//!     ToggleInputProps::new("terms")
//!         .label("Accept terms")
//!         .default_is_checked(true),
//! );
//! let input = mount.dom().find_by_test_id(TOGGLE_INPUT_TEST_ID).unwrap();
//! assert!(input.checked());
//!
//! assert_eq!(mount.click(TOGGLE_INPUT_TEST_ID), Ok(Dispatch::Changed));
//! assert!(!input.checked());
//! ```

use tickmark_core::{
    resolve, Callback, ChangeEvent, Component, Context, Controlled, Element, Listener, Node,
    Source,
};
use tracing::trace;

/// `data-testid` of the rendered `<input>`.
pub const TOGGLE_INPUT_TEST_ID: &str = "checkbox";

/// Names of the [`ToggleInputProps`] options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleProp {
    /// `name` of the underlying input
    Name,
    /// Visible label text
    Label,
    /// Class on the wrapping `<label>`
    ContainerClassName,
    /// Class on the icon `<span>`
    IconClassName,
    /// Class on the label `<span>`
    LabelClassName,
    /// Starting memory in uncontrolled mode
    DefaultIsChecked,
    /// Owner-supplied checked value
    IsChecked,
    /// Change callback
    OnChange,
    /// Disabled flag
    Disabled,
    /// Icon content
    Icon,
}

/// Configuration for a [`ToggleInput`], supplied on every render.
///
/// Every option except the name is optional, and unset options are tracked
/// as unset rather than defaulted, so [`is_controlled`](Self::is_controlled)
/// can tell "not given" from "given as false".
#[derive(Debug, Clone)]
pub struct ToggleInputProps {
    name: String,
    label: Option<String>,
    container_class_name: Option<String>,
    icon_class_name: Option<String>,
    label_class_name: Option<String>,
    default_is_checked: Option<bool>,
    is_checked: Option<bool>,
    on_change: Option<Callback<ChangeEvent>>,
    disabled: Option<bool>,
    icon: Option<Node>,
}

impl ToggleInputProps {
    /// Create props with only the input name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            container_class_name: None,
            icon_class_name: None,
            label_class_name: None,
            default_is_checked: None,
            is_checked: None,
            on_change: None,
            disabled: None,
            icon: None,
        }
    }

    /// Set the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the class of the wrapping `<label>`.
    #[must_use]
    pub fn container_class_name(mut self, class: impl Into<String>) -> Self {
        self.container_class_name = Some(class.into());
        self
    }

    /// Set the class of the icon `<span>`.
    #[must_use]
    pub fn icon_class_name(mut self, class: impl Into<String>) -> Self {
        self.icon_class_name = Some(class.into());
        self
    }

    /// Set the class of the label `<span>`.
    #[must_use]
    pub fn label_class_name(mut self, class: impl Into<String>) -> Self {
        self.label_class_name = Some(class.into());
        self
    }

    /// Set the starting memory for uncontrolled use.
    ///
    /// Read once, when the component is created.
    #[must_use]
    pub const fn default_is_checked(mut self, checked: bool) -> Self {
        self.default_is_checked = Some(checked);
        self
    }

    /// Supply the checked value, making the component controlled.
    #[must_use]
    pub const fn is_checked(mut self, checked: bool) -> Self {
        self.is_checked = Some(checked);
        self
    }

    /// Supply or withdraw the checked value.
    ///
    /// `None` hands control back to the component's own memory.
    #[must_use]
    pub const fn is_checked_opt(mut self, checked: Option<bool>) -> Self {
        self.is_checked = checked;
        self
    }

    /// Set the change callback.
    #[must_use]
    pub fn on_change(mut self, on_change: impl Into<Callback<ChangeEvent>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Set icon content shown next to the input.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Node>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Get the input name.
    #[must_use]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Get the label text.
    #[must_use]
    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the container class.
    #[must_use]
    pub fn get_container_class_name(&self) -> Option<&str> {
        self.container_class_name.as_deref()
    }

    /// Get the icon class.
    #[must_use]
    pub fn get_icon_class_name(&self) -> Option<&str> {
        self.icon_class_name.as_deref()
    }

    /// Get the label class.
    #[must_use]
    pub fn get_label_class_name(&self) -> Option<&str> {
        self.label_class_name.as_deref()
    }

    /// Starting memory, `false` when unset.
    #[must_use]
    pub fn get_default_is_checked(&self) -> bool {
        self.default_is_checked.unwrap_or(false)
    }

    /// Owner-supplied checked value, if any.
    #[must_use]
    pub const fn get_is_checked(&self) -> Option<bool> {
        self.is_checked
    }

    /// Whether the input is disabled, `false` when unset.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Get the icon content.
    #[must_use]
    pub const fn get_icon(&self) -> Option<&Node> {
        self.icon.as_ref()
    }

    /// The change callback, a no-op when unset.
    #[must_use]
    pub fn get_on_change(&self) -> Callback<ChangeEvent> {
        self.on_change.clone().unwrap_or_default()
    }
}

impl Controlled for ToggleInputProps {
    type Prop = ToggleProp;

    fn is_controlled(&self, prop: ToggleProp) -> bool {
        match prop {
            ToggleProp::Name => true,
            ToggleProp::Label => self.label.is_some(),
            ToggleProp::ContainerClassName => self.container_class_name.is_some(),
            ToggleProp::IconClassName => self.icon_class_name.is_some(),
            ToggleProp::LabelClassName => self.label_class_name.is_some(),
            ToggleProp::DefaultIsChecked => self.default_is_checked.is_some(),
            ToggleProp::IsChecked => self.is_checked.is_some(),
            ToggleProp::OnChange => self.on_change.is_some(),
            ToggleProp::Disabled => self.disabled.is_some(),
            ToggleProp::Icon => self.icon.is_some(),
        }
    }
}

/// State a [`ToggleInput`] can hold in its own memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    /// Whether the input is checked
    pub is_checked: bool,
}

/// Checkbox component with controlled and uncontrolled modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleInput {
    memory: ToggleState,
}

impl ToggleInput {
    /// The component's own memory, regardless of mode.
    #[must_use]
    pub const fn memory(&self) -> ToggleState {
        self.memory
    }

    /// State to render for `props`.
    ///
    /// Takes `is_checked` from props when supplied and from memory otherwise.
    /// Never copies the supplied value into memory.
    #[must_use]
    pub fn effective_state(&self, props: &ToggleInputProps) -> ToggleState {
        self.resolve_checked(props).0
    }

    fn resolve_checked(&self, props: &ToggleInputProps) -> (ToggleState, Source) {
        let supplied = props
            .is_controlled(ToggleProp::IsChecked)
            .then_some(props.is_checked)
            .flatten();
        let resolved = resolve(supplied, self.memory.is_checked);
        (
            ToggleState {
                is_checked: resolved.value,
            },
            resolved.source,
        )
    }
}

impl Component for ToggleInput {
    type Props = ToggleInputProps;

    fn create(props: &ToggleInputProps) -> Self {
        Self {
            memory: ToggleState {
                is_checked: props.get_default_is_checked(),
            },
        }
    }

    fn render(&self, props: &ToggleInputProps) -> Element {
        let (state, source) = self.resolve_checked(props);
        trace!(name = %props.name, checked = state.is_checked, ?source, "render");

        let input = Element::new("input")
            .attr("name", props.get_name())
            .attr("type", "checkbox")
            .attr("checked", state.is_checked)
            .attr("disabled", props.is_disabled())
            .attr("data-testid", TOGGLE_INPUT_TEST_ID)
            .listen(Listener::Change);

        let icon = props.icon.as_ref().map(|icon| {
            Element::new("span")
                .attr_opt("class", props.get_icon_class_name())
                .child(icon.clone())
        });

        let label = props
            .get_label()
            .filter(|label| !label.is_empty())
            .map(|label| {
                Element::new("span")
                    .attr_opt("class", props.get_label_class_name())
                    .child(label)
            });

        Element::new("label")
            .attr_opt("class", props.get_container_class_name())
            .child(input)
            .child_opt(icon)
            .child_opt(label)
    }

    fn on_change(&mut self, props: &ToggleInputProps, event: &ChangeEvent, cx: &mut Context) {
        let on_change = props.get_on_change();

        if props.is_controlled(ToggleProp::IsChecked) {
            trace!(name = %props.name, checked = event.checked(), "controlled change");
            on_change.emit(event);
            return;
        }

        self.memory.is_checked = event.checked();
        trace!(name = %props.name, checked = event.checked(), "uncontrolled change");
        let event = event.clone();
        cx.after_commit(move || on_change.emit(&event));
    }

    fn name() -> &'static str {
        "ToggleInput"
    }
}
