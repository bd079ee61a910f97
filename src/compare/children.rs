use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::dom::{Element, Node};
use crate::error::{Error, ErrorKind, NodePath, Result};
use crate::vocabulary::{ElementKind, DETAIL_ID};

/// Children of an element keyed by their id, in document order
pub type ChildMap<'a> = IndexMap<String, &'a Node>;

/// Key the direct children of `element` by id.
///
/// * `testsuite` / `testcase` / `failure` children are keyed by their
///   identifying attribute (an absent attribute gives the empty id).
/// * The CDATA section, if any, is keyed `detail`.
/// * Whitespace-only text is skipped.
///
/// Anything else is malformed input: unknown elements, two children with the
/// same id, a second CDATA section, non-whitespace text, comments and
/// processing instructions.
pub fn classify_children(element: &Element) -> Result<ChildMap<'_>> {
    classify_at(element, &NodePath::root().child(element))
}

pub(crate) fn classify_at<'a>(element: &'a Element, path: &NodePath) -> Result<ChildMap<'a>> {
    let mut children = IndexMap::new();
    for child in &element.children {
        match child {
            Node::Element(el) => {
                let kind = ElementKind::from_tag(&el.name).ok_or_else(|| {
                    Error::at(
                        ErrorKind::UnknownElement {
                            tag: el.name.clone(),
                        },
                        path,
                    )
                })?;
                let id = el
                    .attribute(kind.identifying_attribute())
                    .unwrap_or_default()
                    .to_string();
                insert_unique(&mut children, id, child, path)?;
            }
            Node::Text(text) => {
                if !text.chars().all(char::is_whitespace) {
                    return Err(Error::at(
                        ErrorKind::StrayText { text: text.clone() },
                        path,
                    ));
                }
            }
            Node::CData(_) => {
                if children.contains_key(DETAIL_ID) {
                    return Err(Error::at(ErrorKind::DuplicateDetail, path));
                }
                children.insert(DETAIL_ID.to_string(), child);
            }
            Node::Comment(_) | Node::ProcessingInstruction(_) => {
                return Err(Error::at(
                    ErrorKind::UnexpectedNode { kind: child.kind() },
                    path,
                ));
            }
        }
    }
    Ok(children)
}

fn insert_unique<'a>(
    children: &mut ChildMap<'a>,
    id: String,
    child: &'a Node,
    path: &NodePath,
) -> Result<()> {
    match children.entry(id) {
        Entry::Occupied(entry) => Err(Error::at(
            ErrorKind::DuplicateChild {
                id: entry.key().clone(),
            },
            path,
        )),
        Entry::Vacant(entry) => {
            entry.insert(child);
            Ok(())
        }
    }
}
