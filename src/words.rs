//! Word boundary scanning.
//!
//! A "word" here is a maximal non-empty run of word characters (letter,
//! digit, or underscore). Everything between words is literal pass-through
//! text as far as the word-level rewrites are concerned.
//!
//! The scan is re-run by each consuming stage on its own input; stages hand
//! each other already-transformed strings, so a cached scan result from an
//! earlier stage would be stale.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Returns true for characters that belong to a word.
///
/// Letters and digits use the Unicode classification; underscore is the
/// only punctuation character included.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// A word's UTF-8 byte offsets in the scanned text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordSpan {
    /// Byte offset (inclusive).
    pub start: usize,
    /// Byte offset (exclusive).
    pub end: usize,
}

/// Scans text and produces word spans in document order.
///
/// Offsets are byte positions so that multi-byte characters slice
/// correctly.
///
/// ```rust
/// use normalizer::{word_spans, WordSpan};
///
/// let spans: Vec<WordSpan> = word_spans("so, cool_1!").collect();
/// assert_eq!(spans, vec![
///     WordSpan { start: 0, end: 2 },
///     WordSpan { start: 4, end: 10 },
/// ]);
/// ```
pub fn word_spans(text: &str) -> impl Iterator<Item = WordSpan> + '_ {
    let mut iter = text.char_indices().peekable();
    std::iter::from_fn(move || {
        // Skip the gap before the next word, if any.
        let start = loop {
            let (idx, ch) = iter.next()?;
            if is_word_char(ch) {
                break idx;
            }
        };
        let mut end = text.len();
        while let Some(&(idx, ch)) = iter.peek() {
            if is_word_char(ch) {
                iter.next();
            } else {
                end = idx;
                break;
            }
        }
        Some(WordSpan { start, end })
    })
}

/// Rewrites every word in `text` with `rewrite`, copying inter-word text
/// verbatim.
///
/// `rewrite` returns `None` to keep a word as-is. When no word changes,
/// the input is returned borrowed without allocating.
pub(crate) fn rewrite_words<'a, F>(text: &'a str, mut rewrite: F) -> Cow<'a, str>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out: Option<String> = None;
    let mut copied = 0;

    for span in word_spans(text) {
        let word = &text[span.start..span.end];
        if let Some(replacement) = rewrite(word) {
            let out = out.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[copied..span.start]);
            out.push_str(&replacement);
            copied = span.end;
        }
    }

    match out {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
