//! A minimal XML element tree and its serializer.
//!
//! Attributes keep insertion order and serialization is deterministic, so the
//! same tree always produces the same bytes.

use std::fmt;

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
}

/// An XML element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Element {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn cdata(mut self, data: impl Into<String>) -> Self {
        self.children.push(Node::CData(data.into()));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates the child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Concatenated text and CDATA content of the direct children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    fn write(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{}<{}", indent, self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, Escaped::attr(value))?;
        }

        if self.children.is_empty() {
            return writeln!(f, "/>");
        }

        let inline = self
            .children
            .iter()
            .all(|c| !matches!(c, Node::Element(_)));
        if inline {
            f.write_str(">")?;
            for child in &self.children {
                write_leaf(f, child)?;
            }
            return writeln!(f, "</{}>", self.name);
        }

        writeln!(f, ">")?;
        for child in &self.children {
            match child {
                Node::Element(e) => e.write(f, depth + 1)?,
                leaf => {
                    f.write_str(&"  ".repeat(depth + 1))?;
                    write_leaf(f, leaf)?;
                    writeln!(f)?;
                }
            }
        }
        writeln!(f, "{}</{}>", indent, self.name)
    }
}

fn write_leaf(f: &mut fmt::Formatter, node: &Node) -> fmt::Result {
    match node {
        Node::Text(t) => write!(f, "{}", Escaped::text(t)),
        // "]]>" cannot appear inside a CDATA section; split it across two.
        Node::CData(d) => write!(f, "<![CDATA[{}]]>", d.replace("]]>", "]]]]><![CDATA[>")),
        Node::Element(_) => Ok(()),
    }
}

struct Escaped<'a> {
    raw: &'a str,
    quotes: bool,
}

impl<'a> Escaped<'a> {
    fn attr(raw: &'a str) -> Self {
        Escaped { raw, quotes: true }
    }

    fn text(raw: &'a str) -> Self {
        Escaped { raw, quotes: false }
    }
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.raw.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' if self.quotes => f.write_str("&quot;")?,
                c => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

/// A complete XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serializes the document, including the XML declaration.
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        self.root.write(f, 0)
    }
}
