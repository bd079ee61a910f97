//! Text rewrites for volatile report values

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Replacement for a plain numeric `time` value
pub const TIME_PLACEHOLDER: &str = "*";

/// Start of the stack trace appended to a failure detail
pub const STACK_TRACE_MARKER: &str = "\nStack trace:\n";

#[allow(clippy::expect_used)]
static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("Invalid decimal regex"));

// Anchored at the start of the text and `.` stops at newlines, so only the
// first line can match.
#[allow(clippy::expect_used)]
static SOURCE_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*/(.*:)\d+\n").expect("Invalid source location regex"));

/// `true` for digits with an optional decimal fraction, e.g. `12` or `0.013`
pub fn is_plain_decimal(value: &str) -> bool {
    PLAIN_DECIMAL.is_match(value)
}

/// Drop the directories and the line number from a leading `path/file:LINE`.
///
/// `"/home/user/src/foo_test.cc:42\nExpected true"` becomes
/// `"foo_test.cc:*\nExpected true"`. Text whose first line does not have
/// that shape is returned unchanged.
pub fn strip_source_location(text: &str) -> Cow<'_, str> {
    SOURCE_LOCATION.replacen(text, 1, "${1}*\n")
}

/// Cut the text at [`STACK_TRACE_MARKER`], keeping the newline that ends the
/// last line before it.
pub fn strip_stack_trace(text: &str) -> &str {
    match text.find(STACK_TRACE_MARKER) {
        Some(at) => text.get(..=at).unwrap_or(text),
        None => text,
    }
}

/// Apply [`strip_source_location`] then [`strip_stack_trace`]
pub fn normalize_failure_detail(text: &str) -> String {
    strip_stack_trace(&strip_source_location(text)).to_string()
}
