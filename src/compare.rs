//! Order-insensitive equivalence of report trees

mod children;

pub use children::{classify_children, ChildMap};

use tracing::{debug, trace};

use crate::dom::{Document, Element, Node};
use crate::error::{Error, ErrorKind, NodePath, Result};
use crate::normalize::TIME_PLACEHOLDER;
use crate::vocabulary::TIME_ATTRIBUTE;

/// Check that `actual` is equivalent to `expected`.
///
/// Either both nodes are CDATA sections with the same text, or both are
/// elements where `actual`:
///
/// * has the same tag name,
/// * has the same set of attributes with the same values, except `time`,
///   which only has to be numeric on both sides (or `*` on both sides),
/// * has an equivalent set of children, ignoring their order.
///
/// Returns the first discrepancy found.
pub fn check_equivalent(expected: &Node, actual: &Node) -> Result<()> {
    compare_nodes(expected, actual, &NodePath::root())
        .inspect_err(|err| debug!(error = %err, "report trees differ"))
}

pub fn check_elements(expected: &Element, actual: &Element) -> Result<()> {
    compare_elements(expected, actual, &NodePath::root())
        .inspect_err(|err| debug!(error = %err, "report trees differ"))
}

pub fn check_documents(expected: &Document, actual: &Document) -> Result<()> {
    check_elements(&expected.root, &actual.root)
}

/// Asserts that two nodes are equivalent
///
/// # Panics
///
/// Panics with the first discrepancy if the nodes are not equivalent
#[allow(clippy::panic)]
pub fn assert_equivalent(expected: &Node, actual: &Node) {
    if let Err(err) = check_equivalent(expected, actual) {
        panic!("xml nodes are not equivalent: {err}");
    }
}

/// Asserts that two documents are equivalent
///
/// # Panics
///
/// Panics with the first discrepancy if the documents are not equivalent
#[allow(clippy::panic)]
pub fn assert_documents_equivalent(expected: &Document, actual: &Document) {
    if let Err(err) = check_documents(expected, actual) {
        panic!("xml documents are not equivalent: {err}");
    }
}

fn compare_nodes(expected: &Node, actual: &Node, path: &NodePath) -> Result<()> {
    match (expected, actual) {
        (Node::CData(expected), Node::CData(found)) => {
            if expected == found {
                Ok(())
            } else {
                Err(Error::at(
                    ErrorKind::CdataMismatch {
                        expected: expected.clone(),
                        found: found.clone(),
                    },
                    path,
                ))
            }
        }
        (Node::Element(expected), Node::Element(found)) => compare_elements(expected, found, path),
        (Node::CData(_) | Node::Element(_), found) => Err(Error::at(
            ErrorKind::NodeKindMismatch {
                expected: expected.kind(),
                found: found.kind(),
            },
            path,
        )),
        (other, _) => Err(Error::at(
            ErrorKind::UnexpectedNode { kind: other.kind() },
            path,
        )),
    }
}

fn compare_elements(expected: &Element, actual: &Element, parent: &NodePath) -> Result<()> {
    let path = parent.child(expected);
    trace!(path = %path, "comparing element");

    if expected.name != actual.name {
        return Err(Error::at(
            ErrorKind::TagMismatch {
                expected: expected.name.clone(),
                found: actual.name.clone(),
            },
            &path,
        ));
    }

    compare_attributes(expected, actual).map_err(|kind| Error::at(kind, &path))?;

    let expected_children = children::classify_at(expected, &path)?;
    let actual_children = children::classify_at(actual, &path)?;

    // Missing ids are reported before the count so the message names them.
    if let Some(id) = expected_children
        .keys()
        .find(|id| !actual_children.contains_key(*id))
    {
        return Err(Error::at(
            ErrorKind::MissingChild {
                id: id.clone(),
                actual: actual_children.keys().cloned().collect(),
            },
            &path,
        ));
    }
    if expected_children.len() != actual_children.len() {
        return Err(Error::at(
            ErrorKind::ChildCountMismatch {
                expected: expected_children.len(),
                found: actual_children.len(),
            },
            &path,
        ));
    }

    for (id, child) in &expected_children {
        if let Some(actual_child) = actual_children.get(id) {
            compare_nodes(child, actual_child, &path)?;
        }
    }
    Ok(())
}

fn compare_attributes(expected: &Element, actual: &Element) -> std::result::Result<(), ErrorKind> {
    if expected.attributes.len() != actual.attributes.len() {
        return Err(ErrorKind::AttributeCountMismatch {
            expected: expected.attributes.len(),
            found: actual.attributes.len(),
        });
    }

    for (name, expected_value) in &expected.attributes {
        let Some(actual_value) = actual.attributes.get(name) else {
            return Err(ErrorKind::MissingAttribute { name: name.clone() });
        };
        if name == TIME_ATTRIBUTE {
            compare_times(expected_value, actual_value)?;
        } else if expected_value != actual_value {
            return Err(ErrorKind::AttributeMismatch {
                name: name.clone(),
                expected: expected_value.clone(),
                found: actual_value.clone(),
            });
        }
    }
    Ok(())
}

fn compare_times(expected: &str, actual: &str) -> std::result::Result<(), ErrorKind> {
    if expected == TIME_PLACEHOLDER && actual == TIME_PLACEHOLDER {
        return Ok(());
    }
    for value in [expected, actual] {
        if value.trim().parse::<f64>().is_err() {
            return Err(ErrorKind::NonNumericTime {
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
