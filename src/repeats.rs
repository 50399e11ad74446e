//! Repeated-character collapsing.
//!
//! Stretched-out words ("hellooo", "woooow") are a staple of informal
//! writing. This stage collapses every run of identical consecutive
//! characters inside a word down to a single occurrence. Text between
//! words is never touched, so repeated punctuation ("!!", "...") and
//! repeated whitespace survive this stage.

use std::borrow::Cow;

use crate::words::rewrite_words;

/// Collapses runs of identical consecutive characters within each word.
///
/// Returns the input borrowed when no word contains a repeat. The output
/// is never longer than the input, and the function is idempotent: one
/// pass leaves no surviving run to collapse.
///
/// ```rust
/// use normalizer::collapse_repeats;
///
/// assert_eq!(collapse_repeats("wooooow"), "wow");
/// assert_eq!(collapse_repeats("soo cool!!"), "so col!!");
/// ```
pub fn collapse_repeats(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }

    rewrite_words(text, |word| {
        let mut collapsed = String::with_capacity(word.len());
        let mut chars = word.chars().peekable();
        while let Some(current) = chars.next() {
            collapsed.push(current);
            while chars.peek() == Some(&current) {
                chars.next();
            }
        }
        (collapsed.len() < word.len()).then_some(collapsed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(collapse_repeats(""), "");
    }

    #[test]
    fn collapses_runs_to_one_occurrence() {
        assert_eq!(collapse_repeats("hellooo"), "helo");
        assert_eq!(collapse_repeats("aaabbbccc"), "abc");
        assert_eq!(collapse_repeats("niiice"), "nice");
    }

    #[test]
    fn words_without_repeats_pass_through() {
        assert_eq!(collapse_repeats("normal text"), "normal text");
        assert_eq!(collapse_repeats("a"), "a");
        assert!(matches!(collapse_repeats("no repeats"), Cow::Borrowed(_)));
    }

    #[test]
    fn repeats_are_case_sensitive() {
        assert_eq!(collapse_repeats("aAaA"), "aAaA");
        assert_eq!(collapse_repeats("aAAa"), "aAa");
    }

    #[test]
    fn non_word_runs_are_never_collapsed() {
        assert_eq!(collapse_repeats("wait... what??"), "wait... what??");
        assert_eq!(collapse_repeats("a  b"), "a  b");
        assert_eq!(collapse_repeats("***"), "***");
    }

    #[test]
    fn digits_and_underscores_collapse_too() {
        assert_eq!(collapse_repeats("row_11"), "row_1");
        assert_eq!(collapse_repeats("a__b"), "a_b");
    }

    #[test]
    fn output_never_grows() {
        for input in ["", "x", "heyyy", "so  many   spaces", "¡¡olé!!"] {
            assert!(collapse_repeats(input).len() <= input.len());
        }
    }

    #[test]
    fn single_pass_is_idempotent() {
        for input in ["hellooo", "aabbaabb", "mixed CAse wooords", "  !!  "] {
            let once = collapse_repeats(input).into_owned();
            let twice = collapse_repeats(&once);
            assert_eq!(once, twice);
        }
    }
}
