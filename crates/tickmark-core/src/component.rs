//! The component trait and its dispatch context.

use crate::element::Element;
use crate::event::ChangeEvent;

/// A stateful UI component.
///
/// The host constructs the instance once from its first props, calls
/// [`render`](Component::render) on every commit, and routes change events
/// from elements the render bound with
/// [`Listener::Change`](crate::Listener::Change) to
/// [`on_change`](Component::on_change).
pub trait Component: Sized + 'static {
    /// Configuration supplied by the owner on every render.
    type Props: 'static;

    /// Create the instance and its initial memory.
    fn create(props: &Self::Props) -> Self;

    /// Render the element tree for the current props and memory.
    fn render(&self, props: &Self::Props) -> Element;

    /// Handle a change event raised by a bound element.
    fn on_change(&mut self, props: &Self::Props, event: &ChangeEvent, cx: &mut Context);

    /// Name used in log output.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

type Deferred = Box<dyn FnOnce()>;

/// Per-dispatch context handed to [`Component::on_change`].
#[derive(Default)]
pub struct Context {
    deferred: Vec<Deferred>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` once the re-render following this dispatch has been committed.
    pub fn after_commit(&mut self, f: impl FnOnce() + 'static) {
        self.deferred.push(Box::new(f));
    }

    /// Number of callbacks waiting for the commit.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    pub(crate) fn take_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.deferred)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("pending", &self.deferred.len())
            .finish()
    }
}
