//! XML data model

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::config::DomConfig;
use crate::dom::builder::DomBuilder;
use crate::error::{Error, Result};

/// XML document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Build a document from XML text with default limits
    pub fn parse(xml: &str) -> Result<Self> {
        DomBuilder::new(xml).build()
    }

    pub fn parse_with_config(xml: &str, config: DomConfig) -> Result<Self> {
        DomBuilder::with_config(xml, config).build()
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// XML element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// XML content node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

impl Node {
    pub fn cdata(text: impl Into<String>) -> Self {
        Self::CData(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::CData(_) => NodeKind::CData,
            Self::Comment(_) => NodeKind::Comment,
            Self::ProcessingInstruction(_) => NodeKind::ProcessingInstruction,
        }
    }

    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Category of a [`Node`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    CData,
    Comment,
    ProcessingInstruction,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Element => "element",
            Self::Text => "text",
            Self::CData => "CDATA section",
            Self::Comment => "comment",
            Self::ProcessingInstruction => "processing instruction",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let element = Element::new("testcase")
            .with_attribute("name", "A")
            .with_attribute("time", "0.1")
            .with_child(Node::cdata("detail"));

        assert_eq!(element.attribute("name"), Some("A"));
        assert_eq!(element.attribute("status"), None);
        assert_eq!(element.children.len(), 1);
        assert_eq!(element.child_elements().count(), 0);
    }

    #[test]
    fn test_node_kinds() {
        assert_eq!(Node::from(Element::new("a")).kind(), NodeKind::Element);
        assert_eq!(Node::text(" ").kind(), NodeKind::Text);
        assert_eq!(Node::cdata("x").kind(), NodeKind::CData);
        assert_eq!(NodeKind::CData.to_string(), "CDATA section");
    }
}
