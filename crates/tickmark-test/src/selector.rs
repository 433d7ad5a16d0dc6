//! CSS-like selector parsing for element queries.
//!
//! Supports:
//! - `"input"` - by tag
//! - `"#submit-btn"` - by `id`
//! - `".label"` - by class
//! - `"[data-testid='checkbox']"` - by test ID
//! - `"[name='terms']"` - by attribute value
//! - `"label span"` / `"label > span"` - descendant and child combinators

use tickmark_core::{AttrValue, Element};

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name
    Type(String),
    /// Match by ID (e.g., `#my-id`)
    Id(String),
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by class (e.g., `.my-class`)
    Class(String),
    /// Match by attribute (e.g., `[name='foo']`)
    Attribute { name: String, value: String },
    /// Descendant combinator (e.g., `label span`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `label > span`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches an element on its own.
    ///
    /// Combinators need ancestry and never match here; use
    /// [`matches_at`](Self::matches_at) for them.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Type(tag) => element.tag() == tag,
            Self::Id(id) => element.get_str("id") == Some(id.as_str()),
            Self::TestId(id) => element.test_id() == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Attribute { name, value } => match element.get_attr(name) {
                Some(AttrValue::Str(s)) => s == value,
                Some(AttrValue::Bool(b)) => value.parse::<bool>() == Ok(*b),
                None => false,
            },
            Self::Descendant(_, _) | Self::Child(_, _) => false,
        }
    }

    /// Check if this selector matches the element at `path` below `root`.
    #[must_use]
    pub fn matches_at(&self, root: &Element, path: &[usize]) -> bool {
        match self {
            Self::Descendant(ancestor, sel) => {
                sel.matches_at(root, path)
                    && (0..path.len()).any(|len| ancestor.matches_at(root, &path[..len]))
            }
            Self::Child(parent, sel) => {
                !path.is_empty()
                    && sel.matches_at(root, path)
                    && parent.matches_at(root, &path[..path.len() - 1])
            }
            simple => element_at(root, path).is_some_and(|el| simple.matches(el)),
        }
    }
}

fn element_at<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |el, &idx| el.children().get(idx)?.as_element())
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();

        if self.pos >= self.input.len() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_simple()?;
        loop {
            let had_space = self.skip_whitespace();
            match self.peek_char() {
                None => return Ok(selector),
                Some('>') => {
                    self.advance();
                    self.skip_whitespace();
                    let child = self.parse_simple()?;
                    selector = Selector::Child(Box::new(selector), Box::new(child));
                }
                Some(_) if had_space => {
                    let descendant = self.parse_simple()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(descendant));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
    }

    fn parse_simple(&mut self) -> Result<Selector, SelectorError> {
        let first = self.peek_char().ok_or(SelectorError::ExpectedIdentifier)?;

        match first {
            '#' => {
                self.advance();
                Ok(Selector::Id(self.read_identifier()?))
            }
            '.' => {
                self.advance();
                Ok(Selector::Class(self.read_identifier()?))
            }
            '[' => self.parse_attribute(),
            _ if first.is_alphabetic() => Ok(Selector::Type(self.read_identifier()?)),
            _ => Err(SelectorError::UnexpectedChar(first)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['

        let name = self.read_while(|c| c != '=' && c != ']').trim().to_string();
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        let value = if let Some(quote) = quote {
            self.advance();
            let value = self.read_while(|c| c != quote).to_string();
            if self.peek_char() != Some(quote) {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
            value
        } else {
            self.read_while(|c| c != ']').trim().to_string()
        };

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        if name == "data-testid" {
            Ok(Selector::TestId(value))
        } else {
            Ok(Selector::Attribute { name, value })
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let ident = self.read_while(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if ident.is_empty() {
            return Err(SelectorError::ExpectedIdentifier);
        }
        Ok(ident.to_string())
    }

    fn read_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if !keep(c) {
                break;
            }
            self.advance();
        }
        &self.input[start..self.pos]
    }

    fn skip_whitespace(&mut self) -> bool {
        !self.read_while(char::is_whitespace).is_empty()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Unexpected character
    UnexpectedChar(char),
    /// Expected identifier
    ExpectedIdentifier,
    /// Invalid attribute syntax
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    UnclosedAttribute,
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            Self::ExpectedIdentifier => write!(f, "expected identifier"),
            Self::InvalidAttribute => write!(f, "invalid attribute syntax"),
            Self::UnclosedAttribute => write!(f, "unclosed attribute bracket"),
        }
    }
}

impl std::error::Error for SelectorError {}
