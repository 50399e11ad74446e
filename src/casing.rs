//! Erratic-capitalization repair.
//!
//! Words typed with scattered capitals ("HeLLo", "ThERe") are rewritten
//! to lowercase, keeping a leading capital when the original word started
//! with one. Uniformly-cased words (all upper, all lower, or no cased
//! letters at all) are deliberately left alone: "HELLO" may be shouting,
//! "NASA" may be an acronym, and neither is ours to second-guess.

use std::borrow::Cow;

use crate::words::rewrite_words;

/// Rewrites mixed-case words to lowercase, preserving a leading capital.
///
/// A word is mixed-case when it contains at least one uppercase and at
/// least one lowercase letter. All other words, and all inter-word text,
/// pass through verbatim. For ASCII input the output has the same byte
/// length as the input.
///
/// ```rust
/// use normalizer::normalize_casing;
///
/// assert_eq!(normalize_casing("HeLLo ThERe"), "Hello There");
/// assert_eq!(normalize_casing("ALL CAPS stays"), "ALL CAPS stays");
/// assert_eq!(normalize_casing("aAaA"), "aaaa");
/// ```
pub fn normalize_casing(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }

    rewrite_words(text, |word| {
        if !has_mixed_casing(word) {
            return None;
        }
        let lowered = word.to_lowercase();
        let rewritten = if word.chars().next().is_some_and(char::is_uppercase) {
            capitalize(&lowered)
        } else {
            lowered
        };
        // "Hello"-shaped words rewrite to themselves; skip the copy.
        (rewritten != word).then_some(rewritten)
    })
}

/// Single left-to-right scan that stops as soon as both an uppercase and
/// a lowercase letter have been seen.
fn has_mixed_casing(word: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;

    for ch in word.chars() {
        if ch.is_uppercase() {
            has_upper = true;
        } else if ch.is_lowercase() {
            has_lower = true;
        }
        if has_upper && has_lower {
            return true;
        }
    }

    false
}

/// Uppercases the first character of `word`, leaving the rest as-is.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
