//! Builds a [`Document`] from the events of a `quick-xml` reader

use std::borrow::Cow;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::config::{BuildContext, DomConfig};
use crate::dom::model::{Document, Element, Node};
use crate::error::{Error, ErrorKind, Result};

/// Turns XML text into a report tree.
///
/// Whitespace text, comments and processing instructions inside the root
/// element are kept as nodes; the checker decides what is acceptable.
/// Declarations, doctypes and whitespace outside the root are dropped.
/// Line endings (`\r\n` and a lone `\r`) are read as `\n` before any
/// entity is expanded.
#[derive(Debug)]
pub struct DomBuilder<'a> {
    reader: Reader<&'a [u8]>,
    input_len: usize,
    config: DomConfig,
    context: BuildContext,
    stack: Vec<Element>,
}

impl<'a> DomBuilder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, DomConfig::default())
    }

    pub fn with_config(input: &'a str, config: DomConfig) -> Self {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            input_len: input.len(),
            config,
            context: BuildContext::new(),
            stack: Vec::new(),
        }
    }

    pub fn build(mut self) -> Result<Document> {
        self.config.validate_size(self.input_len)?;

        let mut root = None;
        loop {
            let event = self.reader.read_event().map_err(|e| self.xml_error(e))?;
            match event {
                Event::Start(start) => {
                    let element = self.open_element(&start)?;
                    self.context.enter_nested(&self.config)?;
                    self.stack.push(element);
                }
                Event::End(_) => {
                    let element = self
                        .stack
                        .pop()
                        .ok_or_else(|| self.xml_error("unexpected closing tag"))?;
                    self.context.exit_nested();
                    self.attach(element, &mut root)?;
                }
                Event::Empty(start) => {
                    let element = self.open_element(&start)?;
                    self.attach(element, &mut root)?;
                }
                Event::Text(text) => {
                    let text = self.decode_escaped(&text)?;
                    self.push_leaf(Node::Text(text))?;
                }
                Event::CData(cdata) => {
                    let text = self.decode(&cdata)?;
                    self.push_leaf(Node::CData(text))?;
                }
                Event::Comment(comment) => {
                    let text = self.decode(&comment)?;
                    self.push_leaf(Node::Comment(text))?;
                }
                Event::PI(pi) => {
                    let text = self.decode(&pi)?;
                    self.push_leaf(Node::ProcessingInstruction(text))?;
                }
                Event::Decl(_) | Event::DocType(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(open) = self.stack.last() {
            return Err(self.xml_error(format!("unclosed element <{}>", open.name)));
        }

        let root = root.ok_or(ErrorKind::MissingRoot)?;
        trace!(root = %root.name, "built report tree");
        Ok(Document { root })
    }

    fn open_element(&self, start: &BytesStart<'_>) -> Result<Element> {
        let mut element = Element::new(self.decode(start.name().as_ref())?);
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e))?;
            let name = self.decode(attr.key.as_ref())?;
            let value = self.decode_escaped(&attr.value)?;
            element.attributes.insert(name, value);
        }
        Ok(element)
    }

    fn attach(&mut self, element: Element, root: &mut Option<Element>) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(Node::Element(element));
            return Ok(());
        }
        if root.is_some() {
            return Err(ErrorKind::MultipleRoots.into());
        }
        *root = Some(element);
        Ok(())
    }

    fn push_leaf(&mut self, node: Node) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        match node {
            Node::Text(text) if text.trim().is_empty() => Ok(()),
            Node::Comment(_) | Node::ProcessingInstruction(_) => Ok(()),
            other => Err(self.xml_error(format!("{} outside of the root element", other.kind()))),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(|text| normalize_line_endings(text).into_owned())
            .map_err(|_| self.xml_error("invalid utf-8"))
    }

    fn decode_escaped(&self, bytes: &[u8]) -> Result<String> {
        let raw = self.decode(bytes)?;
        let text = unescape(&raw).map_err(|e| self.xml_error(e))?;
        Ok(text.into_owned())
    }

    fn xml_error(&self, message: impl ToString) -> Error {
        let position = u64::try_from(self.reader.buffer_position()).unwrap_or(u64::MAX);
        ErrorKind::Xml {
            message: message.to_string(),
            position,
        }
        .into()
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
