//! xml-report-check: equivalence checks for XML test reports
//!
//! This crate provides functionality to:
//! - Compare two report trees while ignoring child order and timings
//! - Normalize timings, source paths and stack traces out of a report
//! - Report the first discrepancy together with where it was found
//!
//! # Examples
//! ```
//! use xml_report_check::{check_report, Result};
//!
//! fn example() -> Result<()> {
//!     let expected = r#"<testsuite name="Foo" time="*">
//!         <testcase name="A" time="*"/>
//!         <testcase name="B" time="*"/>
//!     </testsuite>"#;
//!     let actual = r#"<testsuite name="Foo" time="0.013">
//!         <testcase name="B" time="0.002"/>
//!         <testcase name="A" time="0.011"/>
//!     </testsuite>"#;
//!     check_report(expected, actual)
//! }
//! # example().unwrap();
//! ```

use tracing::debug;

pub mod compare;
pub mod config;
pub mod dom;
pub mod error;
pub mod normalize;
pub mod utils;
pub mod vocabulary;

// Re-exports
pub use compare::{
    assert_documents_equivalent, assert_equivalent, check_documents, check_elements,
    check_equivalent, classify_children, ChildMap,
};
pub use config::DomConfig;
pub use dom::{Document, Element, Node, NodeKind};
pub use error::{Category, Error, ErrorKind, NodePath, Result};
pub use normalize::{normalize, normalize_document};
pub use vocabulary::ElementKind;

/// Build both reports, normalize the actual one and check equivalence.
///
/// `expected` is used as written, so fixtures carry `*` for times and
/// bare `file:*` source locations.
pub fn check_report(expected: &str, actual: &str) -> Result<()> {
    let expected = Document::parse(expected)?;
    let mut actual = Document::parse(actual)?;
    normalize_document(&mut actual)?;
    debug!(root = %actual.root.name, "comparing normalized report");
    check_documents(&expected, &actual)
}
