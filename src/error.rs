//! Error types for xml-report-check

use std::fmt;
use thiserror::Error;

use crate::dom::{Element, NodeKind};
use crate::vocabulary::ElementKind;

/// Location of an element inside a report tree, outermost element first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// Path above the outermost element
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Path of `element` as a child of `self`.
    ///
    /// Recognized elements are qualified by their identifying attribute,
    /// e.g. `testcase[name=Bar]`, so that siblings stay distinguishable.
    /// Control characters in the value are escaped, keeping the path on one
    /// line.
    pub fn child(&self, element: &Element) -> Self {
        let segment = match ElementKind::from_tag(&element.name) {
            Some(kind) => {
                let attr = kind.identifying_attribute();
                format!(
                    "{}[{attr}={}]",
                    element.name,
                    element.attribute(attr).unwrap_or_default().escape_debug()
                )
            }
            None => element.name.clone(),
        };
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "/");
        }
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Broad class of an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// The two trees differ
    Mismatch,
    /// A tree breaks the shape rules of a test report
    MalformedInput,
    /// The XML text could not be turned into a tree
    Document,
}

/// Error kind for detailed categorization
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("node kind mismatch: expected {expected}, found {found}")]
    NodeKindMismatch { expected: NodeKind, found: NodeKind },

    #[error("tag mismatch: expected <{expected}>, found <{found}>")]
    TagMismatch { expected: String, found: String },

    #[error("attribute count mismatch: expected {expected}, found {found}")]
    AttributeCountMismatch { expected: usize, found: usize },

    #[error("missing attribute \"{name}\"")]
    MissingAttribute { name: String },

    #[error("attribute \"{name}\" mismatch: expected {expected:?}, found {found:?}")]
    AttributeMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("attribute \"time\" is not numeric: {value:?}")]
    NonNumericTime { value: String },

    #[error("CDATA mismatch: expected {expected:?}, found {found:?}")]
    CdataMismatch { expected: String, found: String },

    #[error("child count mismatch: expected {expected}, found {found}")]
    ChildCountMismatch { expected: usize, found: usize },

    #[error("<{id}> is not in <{}>", .actual.join(", "))]
    MissingChild { id: String, actual: Vec<String> },

    #[error("encountered unknown element <{tag}>")]
    UnknownElement { tag: String },

    #[error("duplicate child id \"{id}\"")]
    DuplicateChild { id: String },

    #[error("non-whitespace text: {text:?}")]
    StrayText { text: String },

    #[error("more than one CDATA section")]
    DuplicateDetail,

    #[error("encountered unexpected node kind: {kind}")]
    UnexpectedNode { kind: NodeKind },

    #[error("<{tag}> has no \"time\" attribute")]
    MissingTime { tag: String },

    #[error("invalid xml at byte {position}: {message}")]
    Xml { message: String, position: u64 },

    #[error("document has no root element")]
    MissingRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: usize },

    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },

    #[error("io error: {0}")]
    Io(String),
}

impl ErrorKind {
    pub const fn category(&self) -> Category {
        match self {
            Self::NodeKindMismatch { .. }
            | Self::TagMismatch { .. }
            | Self::AttributeCountMismatch { .. }
            | Self::MissingAttribute { .. }
            | Self::AttributeMismatch { .. }
            | Self::NonNumericTime { .. }
            | Self::CdataMismatch { .. }
            | Self::ChildCountMismatch { .. }
            | Self::MissingChild { .. } => Category::Mismatch,
            Self::UnknownElement { .. }
            | Self::DuplicateChild { .. }
            | Self::StrayText { .. }
            | Self::DuplicateDetail
            | Self::UnexpectedNode { .. }
            | Self::MissingTime { .. } => Category::MalformedInput,
            Self::Xml { .. }
            | Self::MissingRoot
            | Self::MultipleRoots
            | Self::MaxDepthExceeded { .. }
            | Self::MaxSizeExceeded { .. }
            | Self::Io(_) => Category::Document,
        }
    }
}

/// Main error type for xml-report-check
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    path: NodePath,
}

impl Error {
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: NodePath::root(),
        }
    }

    /// Create error at a specific element
    pub fn at(kind: ErrorKind, path: &NodePath) -> Self {
        Self {
            kind,
            path: path.clone(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path, self.kind)
        }
    }
}

/// Result type alias for xml-report-check
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let suite = Element::new("testsuite").with_attribute("name", "Foo");
        let case = Element::new("testcase").with_attribute("name", "Bar");
        let path = NodePath::root()
            .child(&Element::new("testsuites"))
            .child(&suite)
            .child(&case);
        assert_eq!(
            path.to_string(),
            "testsuites/testsuite[name=Foo]/testcase[name=Bar]"
        );
        assert_eq!(NodePath::root().to_string(), "/");
    }

    #[test]
    fn test_failure_segment_uses_message() {
        let failure = Element::new("failure").with_attribute("message", "boom");
        let path = NodePath::root().child(&failure);
        assert_eq!(path.segments(), ["failure[message=boom]".to_string()]);
    }

    #[test]
    fn test_multiline_message_is_escaped() {
        let failure = Element::new("failure")
            .with_attribute("message", "foo_test.cc:*\nExpected true\r\n\tat");
        let path = NodePath::root().child(&failure);
        assert_eq!(
            path.to_string(),
            "failure[message=foo_test.cc:*\\nExpected true\\r\\n\\tat]"
        );
        assert!(!path.to_string().contains('\n'));
    }

    #[test]
    fn test_error_display() {
        let path = NodePath::root().child(&Element::new("testsuites"));
        let err = Error::at(
            ErrorKind::MissingChild {
                id: "B".to_string(),
                actual: vec!["A".to_string()],
            },
            &path,
        );
        assert_eq!(err.to_string(), "at testsuites: <B> is not in <A>");
    }

    #[test]
    fn test_error_without_path() {
        let err = Error::new(ErrorKind::MissingRoot);
        assert_eq!(err.to_string(), "document has no root element");
        assert_eq!(err.category(), Category::Document);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            ErrorKind::DuplicateChild { id: "A".into() }.category(),
            Category::MalformedInput
        );
        assert_eq!(
            ErrorKind::ChildCountMismatch {
                expected: 2,
                found: 1
            }
            .category(),
            Category::Mismatch
        );
    }
}
