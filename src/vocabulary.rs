//! Element kinds understood by the checker

use std::fmt;

/// Attribute holding a wall-clock duration
pub const TIME_ATTRIBUTE: &str = "time";

/// Child id given to the CDATA section of an element
pub const DETAIL_ID: &str = "detail";

/// The closed set of report elements that may appear as children
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    TestSuite,
    TestCase,
    Failure,
}

impl ElementKind {
    pub const ALL: [Self; 3] = [Self::TestSuite, Self::TestCase, Self::Failure];

    /// Look up the kind for a tag name, `None` if the tag is not part of the
    /// report vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::TestSuite => "testsuite",
            Self::TestCase => "testcase",
            Self::Failure => "failure",
        }
    }

    /// Attribute that tells siblings of this kind apart
    pub const fn identifying_attribute(self) -> &'static str {
        match self {
            Self::TestSuite | Self::TestCase => "name",
            Self::Failure => "message",
        }
    }

    /// Whether elements of this kind carry a `time` attribute
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::TestSuite | Self::TestCase)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
