//! In-place erasure of run-to-run noise from report trees

mod text;

pub use text::{
    is_plain_decimal, normalize_failure_detail, strip_source_location, strip_stack_trace,
    STACK_TRACE_MARKER, TIME_PLACEHOLDER,
};

use tracing::trace;

use crate::dom::{Document, Element, Node};
use crate::error::{Error, ErrorKind, NodePath, Result};
use crate::vocabulary::{ElementKind, TIME_ATTRIBUTE};

/// Normalize `element` and all of its descendants in place.
///
/// * The `time` attribute of `<testsuite>` and `<testcase>` elements is
///   replaced with `*` when it is a plain decimal number.
/// * Every CDATA section of a `<failure>` element loses the directories and
///   line number of its leading source location and everything from the
///   stack trace marker on.
///
/// A `<testsuite>` or `<testcase>` without a `time` attribute is an error.
/// Normalizing twice gives the same tree as normalizing once.
pub fn normalize(element: &mut Element) -> Result<()> {
    normalize_at(element, &NodePath::root())
}

pub fn normalize_document(document: &mut Document) -> Result<()> {
    normalize(&mut document.root)
}

fn normalize_at(element: &mut Element, parent: &NodePath) -> Result<()> {
    let path = parent.child(element);

    match ElementKind::from_tag(&element.name) {
        Some(kind) if kind.is_timed() => {
            let time = element.attributes.get_mut(TIME_ATTRIBUTE).ok_or_else(|| {
                Error::at(
                    ErrorKind::MissingTime {
                        tag: kind.tag().to_string(),
                    },
                    &path,
                )
            })?;
            if is_plain_decimal(time) {
                trace!(path = %path, time = %time, "erasing time");
                *time = TIME_PLACEHOLDER.to_string();
            }
        }
        Some(ElementKind::Failure) => {
            for child in &mut element.children {
                if let Node::CData(detail) = child {
                    *detail = normalize_failure_detail(detail);
                }
            }
        }
        _ => {}
    }

    for child in element.children.iter_mut().filter_map(Node::as_element_mut) {
        normalize_at(child, &path)?;
    }
    Ok(())
}
