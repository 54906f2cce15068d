//! Plain description of a rendered element: tag, class string, attributes
//! and children. Primitive views produce these; the Leptos components render
//! the same classes and attributes directly.

use std::collections::BTreeMap;
use std::fmt;

use leptos::logging::debug_warn;

use crate::error::{UiError, UiResult};

/// Tags rendered without a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// Plain (non `data-*`/`aria-*`) attributes accepted by [`AttributeBag`].
const PASSTHROUGH_ALLOW_LIST: &[&str] = &[
    "id",
    "title",
    "role",
    "tabindex",
    "lang",
    "dir",
    "hidden",
    "name",
    "autocomplete",
    "inputmode",
    "maxlength",
    "minlength",
    "pattern",
    "readonly",
    "autofocus",
    "form",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(DescribedElement),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<DescribedElement> for Node {
    fn from(element: DescribedElement) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedElement {
    pub tag: &'static str,
    pub class: String,
    /// Sorted so the rendered markup is stable.
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl DescribedElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute: present (empty value) while `on` holds.
    pub fn flag(self, name: &str, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    /// Copies pass-through attributes. Call before setting owned attributes
    /// so the component's own values win.
    pub fn passthrough(mut self, bag: &AttributeBag) -> Self {
        self.attributes
            .extend(bag.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &DescribedElement> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search over this element and its descendants.
    pub fn find_all(&self, pred: impl Fn(&DescribedElement) -> bool + Copy) -> Vec<&DescribedElement> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(
        &'a self,
        pred: impl Fn(&DescribedElement) -> bool + Copy,
        found: &mut Vec<&'a DescribedElement>,
    ) {
        if pred(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(pred, found);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DescribedElement> {
        self.find_all(|el| el.attribute("id") == Some(id))
            .into_iter()
            .next()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }
}

/// Renders the element as HTML markup.
impl fmt::Display for DescribedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.class.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.class, true))?;
        }
        for (name, value) in &self.attributes {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"{}\"", escape(value, true))?;
            }
        }
        if self.is_void() {
            return f.write_str(" />");
        }
        f.write_str(">")?;
        for node in &self.children {
            match node {
                Node::Text(text) => f.write_str(&escape(text, false))?,
                Node::Element(element) => write!(f, "{element}")?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(raw: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Bounded set of caller attributes forwarded onto a primitive's root
/// element. Accepts `data-*`, `aria-*` and a fixed list of plain attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag(BTreeMap<String, String>);

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_allowed(name: &str) -> bool {
        let name_ok = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        name_ok
            && (name.starts_with("data-")
                || name.starts_with("aria-")
                || PASSTHROUGH_ALLOW_LIST.contains(&name))
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> UiResult<()> {
        if !Self::is_allowed(name) {
            debug_warn!("rejected pass-through attribute {name:?}");
            return Err(UiError::disallowed_attribute(name));
        }
        self.0.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> UiResult<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose names are not in `owned`.
    pub fn iter_excluding<'a>(
        &'a self,
        owned: &'a [&str],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.iter().filter(move |(name, _)| !owned.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
