//! Stage-direction annotation removal.
//!
//! Transcripts mark non-verbal actions with asterisk pairs: `*cough*`,
//! `*laughs nervously*`. This stage deletes each such span (delimiters
//! included) and then repairs the whitespace damage the deletion leaves
//! behind: interior runs of two or more whitespace characters collapse
//! to a single ASCII space, and whitespace stranded at either end of the
//! string is dropped.
//!
//! The repair pass runs only when at least one annotation was removed,
//! so asterisk-free text is always returned untouched.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Asterisk pair with no asterisk inside: the shortest possible match,
/// taken non-overlapping, left to right.
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*[^*]*\*").unwrap());

/// Two or more consecutive whitespace characters.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Removes `*...*` annotations and normalizes the surrounding whitespace.
///
/// An unmatched `*` with no closing partner cannot complete a match and
/// is left in place. Matching is a single pass: removal never re-triggers
/// matching across a removal boundary.
///
/// ```rust
/// use normalizer::strip_annotations;
///
/// assert_eq!(strip_annotations("Hello *cough* there"), "Hello there");
/// assert_eq!(strip_annotations("*cough* Hi there"), "Hi there");
/// assert_eq!(strip_annotations("2 * 3 = 6"), "2 * 3 = 6");
/// ```
pub fn strip_annotations(text: &str) -> Cow<'_, str> {
    let stripped = match ANNOTATION.replace_all(text, "") {
        // No annotation anywhere: hand the input back untouched.
        Cow::Borrowed(_) => return Cow::Borrowed(text),
        Cow::Owned(stripped) => stripped,
    };
    let repaired = WHITESPACE_RUN.replace_all(&stripped, " ");
    Cow::Owned(repaired.trim().to_string())
}
