//! Element tree produced by component renders.
//!
//! An [`Element`] is a tag with attributes, children and bound listeners.
//! Renders build a fresh tree every time; the host commits it into a
//! [`Dom`](crate::Dom).
//!
//! # Examples
//!
//! ```
//! use tickmark_core::{Element, Listener};
//!
//! let input = Element::new("input")
//!     .attr("type", "checkbox")
//!     .attr("checked", true)
//!     .attr("disabled", false)
//!     .listen(Listener::Change);
//!
//! assert_eq!(input.to_html(), r#"<input checked="" type="checkbox"/>"#);
//! assert!(input.listens(Listener::Change));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tags that never have children and serialize as `<tag/>`.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Attribute value on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute; `false` is left out of markup
    Bool(bool),
    /// String attribute
    Str(String),
}

impl AttrValue {
    /// String content, if this is a string attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Whether the attribute counts as set.
    ///
    /// Any string value is set, matching how browsers treat `checked="false"`.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(_) => true,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

/// Events an element can have a handler bound for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Listener {
    /// Checked/value change on a form control
    Change,
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Element node
    Element(Element),
    /// Text node
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The element, if this is an element node.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Mutable element access.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(el) => el.text_content(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Serialize to markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(el) => el.write_html(out),
            Self::Text(text) => escape_into(text, false, out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A rendered element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
    listeners: Vec<Listener>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    #[must_use]
    pub fn attr_opt<V: Into<AttrValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when present.
    #[must_use]
    pub fn child_opt<N: Into<Node>>(self, child: Option<N>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Bind a listener.
    #[must_use]
    pub fn listen(mut self, listener: Listener) -> Self {
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute by name.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// String attribute by name.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    /// Whether a boolean attribute is set.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.attrs.get(name).is_some_and(AttrValue::is_set)
    }

    /// Overwrite an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// All attributes, sorted by name.
    #[must_use]
    pub const fn attrs(&self) -> &BTreeMap<String, AttrValue> {
        &self.attrs
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable child nodes.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Whether a listener is bound.
    #[must_use]
    pub fn listens(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// Value of `data-testid`.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.get_str("data-testid")
    }

    /// Whether the whitespace-separated `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_str("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Serialize to markup.
    ///
    /// Attributes come out sorted by name. `true` booleans render as
    /// `name=""` and `false` booleans are left out.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Bool(false) => continue,
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"\"");
                }
                AttrValue::Str(s) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(s, true, out);
                    out.push('"');
                }
            }
        }

        if VOID_TAGS.contains(&self.tag.as_str()) && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
