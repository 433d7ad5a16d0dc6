//! Mounted component instances.
//!
//! A [`Mount`] owns one component instance, its current props and the
//! committed [`Dom`]. It is the host side of the component lifecycle:
//!
//! 1. **Mount**: create the instance from its first props and commit the
//!    first render.
//! 2. **Update**: re-render on new props or after an event dispatch.
//! 3. **Unmount**: clear the tree and drop the instance.
//!
//! # Dispatch order
//!
//! A toggling input at an element bound with [`Listener::Change`] runs:
//!
//! 1. the native toggle of the element's `checked` state,
//! 2. [`Component::on_change`],
//! 3. a commit of the re-render for the current props,
//! 4. callbacks deferred with [`Context::after_commit`],
//! 5. for owner-driven mounts, a props refresh from the owner and another
//!    commit.
//!
//! Step 3 also puts a controlled value back if the owner did not change it.

use crate::component::{Component, Context};
use crate::dom::{Dom, NodeRef};
use crate::element::Listener;
use crate::error::HostError;
use crate::event::{ChangeEvent, Event};
use crate::lifecycle::{LifecycleEvent, LifecycleHooks, LifecyclePhase};
use tracing::debug;

/// Outcome of dispatching an event.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The element changed and the component handled it.
    Changed,
    /// The event had no effect (disabled element, or a non-toggling input).
    Ignored,
}

type Owner<P> = Box<dyn Fn() -> P>;

/// A mounted component instance.
pub struct Mount<C: Component> {
    instance: C,
    props: C::Props,
    owner: Option<Owner<C::Props>>,
    dom: Dom,
    hooks: LifecycleHooks,
    commits: u64,
}

impl<C: Component> Mount<C> {
    /// Mount a component with fixed props.
    pub fn new(props: C::Props) -> Self {
        Self::with_hooks(props, LifecycleHooks::new())
    }

    /// Mount a component with fixed props and pre-registered lifecycle hooks.
    pub fn with_hooks(props: C::Props, hooks: LifecycleHooks) -> Self {
        Self::mount(props, None, hooks)
    }

    /// Mount a component whose props come from an owner.
    ///
    /// `owner` is called for the first props and again after every dispatch,
    /// standing in for a parent that re-renders when its own state changes.
    pub fn owned(owner: impl Fn() -> C::Props + 'static) -> Self {
        let props = owner();
        Self::mount(props, Some(Box::new(owner)), LifecycleHooks::new())
    }

    fn mount(props: C::Props, owner: Option<Owner<C::Props>>, mut hooks: LifecycleHooks) -> Self {
        let instance = C::create(&props);
        let dom = Dom::new(instance.render(&props));
        debug!(component = C::name(), "mounted");
        hooks.emit(&LifecycleEvent::new(LifecyclePhase::Mount, 1));
        Self {
            instance,
            props,
            owner,
            dom,
            hooks,
            commits: 1,
        }
    }

    /// The component instance.
    pub const fn instance(&self) -> &C {
        &self.instance
    }

    /// Props used for the last commit.
    pub const fn props(&self) -> &C::Props {
        &self.props
    }

    /// The committed tree.
    pub const fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Markup of the committed tree.
    pub fn html(&self) -> String {
        self.dom.to_html()
    }

    /// Number of commits since mount, including the first render.
    pub const fn commits(&self) -> u64 {
        self.commits
    }

    /// Lifecycle hooks, for registering update and unmount callbacks.
    pub fn hooks_mut(&mut self) -> &mut LifecycleHooks {
        &mut self.hooks
    }

    /// Replace the props and re-render.
    ///
    /// For owner-driven mounts the owner stays attached and takes over again
    /// at the next dispatch.
    pub fn set_props(&mut self, props: C::Props) {
        self.props = props;
        self.commit();
    }

    /// Re-render, refreshing props from the owner if there is one.
    pub fn rerender(&mut self) {
        if let Some(owner) = &self.owner {
            self.props = owner();
        }
        self.commit();
    }

    /// Click the element with the given test ID.
    pub fn click(&mut self, test_id: &str) -> Result<Dispatch, HostError> {
        self.dispatch(test_id, Event::Click)
    }

    /// Dispatch an event at the element with the given test ID.
    pub fn dispatch(&mut self, test_id: &str, event: Event) -> Result<Dispatch, HostError> {
        let target = self
            .dom
            .find_by_test_id(test_id)
            .ok_or_else(|| HostError::ElementNotFound {
                test_id: test_id.to_string(),
            })?;
        self.dispatch_at(&target, event)
    }

    /// Dispatch an event at a node of this mount's tree.
    ///
    /// A node taken from another mount is rejected with
    /// [`HostError::ForeignNode`] and neither tree changes.
    pub fn dispatch_at(&mut self, target: &NodeRef, event: Event) -> Result<Dispatch, HostError> {
        if !self.dom.owns(target) {
            return Err(HostError::ForeignNode {
                path: target.path().to_vec(),
            });
        }
        let element = target.element().ok_or_else(|| HostError::Detached {
            path: target.path().to_vec(),
        })?;
        if !element.listens(Listener::Change) {
            return Err(HostError::NoListener {
                tag: element.tag().to_string(),
            });
        }
        if element.flag("disabled") || !event.toggles_checkbox() {
            debug!(component = C::name(), ?event, "event ignored");
            return Ok(Dispatch::Ignored);
        }

        let checked = target.toggle_checked().ok_or_else(|| HostError::Detached {
            path: target.path().to_vec(),
        })?;
        let change = ChangeEvent::new(
            target.clone(),
            element.get_str("name").map(str::to_string),
            checked,
        );
        debug!(component = C::name(), ?event, checked, "dispatching change");

        let mut cx = Context::new();
        self.instance.on_change(&self.props, &change, &mut cx);
        self.commit();

        for deferred in cx.take_deferred() {
            deferred();
        }

        if self.owner.is_some() {
            self.rerender();
        }
        Ok(Dispatch::Changed)
    }

    /// Destroy the instance and clear the tree.
    ///
    /// Node references taken from this mount stop resolving.
    pub fn unmount(mut self) {
        self.hooks
            .emit(&LifecycleEvent::new(LifecyclePhase::Unmount, self.commits));
        self.dom.clear();
        debug!(component = C::name(), commits = self.commits, "unmounted");
    }

    fn commit(&mut self) {
        let tree = self.instance.render(&self.props);
        self.dom.replace(tree);
        self.commits += 1;
        debug!(component = C::name(), commit = self.commits, "committed");
        self.hooks
            .emit(&LifecycleEvent::new(LifecyclePhase::Update, self.commits));
    }
}

impl<C: Component> std::fmt::Debug for Mount<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mount")
            .field("component", &C::name())
            .field("commits", &self.commits)
            .field("owned", &self.owner.is_some())
            .field("dom", &self.dom)
            .finish_non_exhaustive()
    }
}
