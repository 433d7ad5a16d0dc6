//! Committed element tree with live node handles.
//!
//! The host commits every render into a [`Dom`]. A [`NodeRef`] addresses a
//! node by its child-index path and always reads the *current* committed
//! tree, the way a DOM node reference observes later updates.

use crate::element::{AttrValue, Element, Node};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to the committed tree. Cloning shares the same tree.
#[derive(Clone, Default)]
pub struct Dom {
    root: Rc<RefCell<Option<Element>>>,
}

impl Dom {
    /// Create a tree holding `root`.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            root: Rc::new(RefCell::new(Some(root))),
        }
    }

    /// Replace the whole tree with a freshly rendered one.
    pub fn replace(&self, root: Element) {
        *self.root.borrow_mut() = Some(root);
    }

    /// Drop the tree. Outstanding [`NodeRef`]s stop resolving.
    pub fn clear(&self) {
        *self.root.borrow_mut() = None;
    }

    /// Whether a tree is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.root.borrow().is_some()
    }

    /// Copy of the current tree.
    #[must_use]
    pub fn snapshot(&self) -> Option<Element> {
        self.root.borrow().clone()
    }

    /// Markup of the current tree, empty when nothing is mounted.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.root
            .borrow()
            .as_ref()
            .map(Element::to_html)
            .unwrap_or_default()
    }

    /// Whether `node` addresses this tree rather than another one.
    pub(crate) fn owns(&self, node: &NodeRef) -> bool {
        Rc::ptr_eq(&self.root, &node.dom.root)
    }

    /// Handle to the root element.
    #[must_use]
    pub fn root_ref(&self) -> NodeRef {
        NodeRef {
            dom: self.clone(),
            path: Vec::new(),
        }
    }

    /// First element in document order matching `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<NodeRef> {
        let root = self.root.borrow();
        let mut path = Vec::new();
        let found = find_path(root.as_ref()?, &pred, &mut path);
        drop(root);
        found.then(|| NodeRef {
            dom: self.clone(),
            path,
        })
    }

    /// All elements in document order matching `pred`.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodeRef> {
        let mut paths = Vec::new();
        if let Some(root) = self.root.borrow().as_ref() {
            let pred = |el: &Element, _: &[usize]| pred(el);
            collect_paths(root, &pred, &mut Vec::new(), &mut paths);
        }
        self.refs(paths)
    }

    /// All elements in document order for which `pred(root, path)` holds.
    ///
    /// For predicates that need ancestry, such as selector combinators.
    pub fn find_all_in_tree(&self, pred: impl Fn(&Element, &[usize]) -> bool) -> Vec<NodeRef> {
        let mut paths = Vec::new();
        if let Some(root) = self.root.borrow().as_ref() {
            let pred = |_: &Element, path: &[usize]| pred(root, path);
            collect_paths(root, &pred, &mut Vec::new(), &mut paths);
        }
        self.refs(paths)
    }

    fn refs(&self, paths: Vec<Vec<usize>>) -> Vec<NodeRef> {
        paths
            .into_iter()
            .map(|path| NodeRef {
                dom: self.clone(),
                path,
            })
            .collect()
    }

    /// First element whose `data-testid` equals `test_id`.
    #[must_use]
    pub fn find_by_test_id(&self, test_id: &str) -> Option<NodeRef> {
        self.find(|el| el.test_id() == Some(test_id))
    }

    fn with_element<R>(&self, path: &[usize], f: impl FnOnce(&Element) -> R) -> Option<R> {
        let root = self.root.borrow();
        resolve(root.as_ref()?, path).map(f)
    }

    fn with_element_mut<R>(
        &self,
        path: &[usize],
        f: impl FnOnce(&mut Element) -> R,
    ) -> Option<R> {
        let mut root = self.root.borrow_mut();
        resolve_mut(root.as_mut()?, path).map(f)
    }
}

impl fmt::Debug for Dom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dom")
            .field("html", &self.to_html())
            .finish()
    }
}

fn resolve<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |el, &idx| el.children().get(idx)?.as_element())
}

fn resolve_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut el = root;
    for &idx in path {
        el = el.children_mut().get_mut(idx)?.as_element_mut()?;
    }
    Some(el)
}

fn find_path(el: &Element, pred: &impl Fn(&Element) -> bool, path: &mut Vec<usize>) -> bool {
    if pred(el) {
        return true;
    }
    for (idx, child) in el.children().iter().enumerate() {
        if let Node::Element(child) = child {
            path.push(idx);
            if find_path(child, pred, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}

fn collect_paths(
    el: &Element,
    pred: &impl Fn(&Element, &[usize]) -> bool,
    path: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if pred(el, path) {
        out.push(path.clone());
    }
    for (idx, child) in el.children().iter().enumerate() {
        if let Node::Element(child) = child {
            path.push(idx);
            collect_paths(child, pred, path, out);
            path.pop();
        }
    }
}

/// Live handle to an element in a [`Dom`].
///
/// Reads go through to the committed tree at call time. If the tree is
/// cleared or re-rendered without a node at this path, reads return
/// `None`/`false`.
#[derive(Clone)]
pub struct NodeRef {
    dom: Dom,
    path: Vec<usize>,
}

impl NodeRef {
    /// Child-index path from the root.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Whether the node currently resolves to an element.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.dom.with_element(&self.path, |_| ()).is_some()
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        self.dom.with_element(&self.path, |el| el.tag().to_string())
    }

    /// Attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<AttrValue> {
        self.dom
            .with_element(&self.path, |el| el.get_attr(name).cloned())
            .flatten()
    }

    /// String attribute value.
    #[must_use]
    pub fn attr_str(&self, name: &str) -> Option<String> {
        self.dom
            .with_element(&self.path, |el| el.get_str(name).map(str::to_string))
            .flatten()
    }

    /// Current `checked` state.
    #[must_use]
    pub fn checked(&self) -> bool {
        self.flag("checked")
    }

    /// Current `disabled` state.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.flag("disabled")
    }

    /// Whether a boolean attribute is set.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.dom
            .with_element(&self.path, |el| el.flag(name))
            .unwrap_or(false)
    }

    /// Value of `data-testid`.
    #[must_use]
    pub fn test_id(&self) -> Option<String> {
        self.attr_str("data-testid")
    }

    /// Concatenated descendant text.
    #[must_use]
    pub fn text(&self) -> String {
        self.dom
            .with_element(&self.path, Element::text_content)
            .unwrap_or_default()
    }

    /// Markup of this node.
    #[must_use]
    pub fn html(&self) -> Option<String> {
        self.dom.with_element(&self.path, Element::to_html)
    }

    /// Copy of the element.
    #[must_use]
    pub fn element(&self) -> Option<Element> {
        self.dom.with_element(&self.path, Clone::clone)
    }

    /// Flip the node's checked state in place, the native toggle a click
    /// performs before change handlers run. Returns the new state.
    pub(crate) fn toggle_checked(&self) -> Option<bool> {
        self.dom.with_element_mut(&self.path, |el| {
            let next = !el.flag("checked");
            el.set_attr("checked", next);
            next
        })
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("path", &self.path)
            .field("tag", &self.tag())
            .finish()
    }
}
