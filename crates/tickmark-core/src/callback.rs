//! Shareable event callbacks passed down through props.

use std::fmt;
use std::rc::Rc;

/// A cloneable `Fn(&E)` handle.
///
/// Callbacks that need to mutate captured state use `Cell`/`RefCell`, as
/// every callback runs on the thread that owns the mount.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickmark_core::Callback;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let cb = Callback::new(move |n: &i32| counter.set(counter.get() + n));
///
/// cb.emit(&2);
/// cb.clone().emit(&3);
/// assert_eq!(hits.get(), 5);
/// ```
pub struct Callback<E> {
    f: Rc<dyn Fn(&E)>,
}

impl<E: 'static> Callback<E> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&E) + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// A callback that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

impl<E> Callback<E> {
    /// Invoke the callback.
    pub fn emit(&self, event: &E) {
        (self.f)(event);
    }

    /// Whether both handles share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<E> Clone for Callback<E> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<E: 'static> Default for Callback<E> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<E> fmt::Debug for Callback<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<E: 'static, F: Fn(&E) + 'static> From<F> for Callback<E> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
