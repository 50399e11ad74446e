//! Transcript and chat text normalization.
//!
//! Informally-written text arrives with stretched-out words, `*stage
//! direction*` annotations, and ransom-note capitalization. This crate
//! rewrites such text into a plain form in three fixed stages:
//!
//! 1. **Repeated characters** - runs of identical consecutive characters
//!    inside a word collapse to one ("wooow" → "wow")
//! 2. **Annotations** - `*...*` spans are removed and the whitespace
//!    damage around them is repaired
//! 3. **Casing** - mixed-case words are rewritten to lowercase, keeping
//!    a leading capital when the original had one ("HeLLo" → "Hello")
//!
//! [`normalize`] runs all three in order; each stage is also exported on
//! its own so hosts can compose or test them in isolation.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clocks, no locale dependence, no shared mutable state.
//! Same input, same output, on any machine. Every input is valid: there
//! is no error path anywhere in the crate, and the empty string maps to
//! itself.
//!
//! ## Invariants worth knowing
//!
//! - Stage order is fixed; each stage consumes the full output of the
//!   previous one
//! - Repeated-character collapsing and casing repair operate on words
//!   (letter/digit/underscore runs); annotation removal operates on raw
//!   character spans
//! - Output never grows except where casing rewrites expand a character
//!   under Unicode case mapping; for ASCII the casing stage is
//!   length-preserving

mod annotations;
mod casing;
mod config;
mod pipeline;
mod repeats;
mod words;

pub use crate::annotations::strip_annotations;
pub use crate::casing::normalize_casing;
pub use crate::config::NormalizeConfig;
pub use crate::pipeline::{normalize, normalize_with};
pub use crate::repeats::collapse_repeats;
pub use crate::words::{is_word_char, word_spans, WordSpan};
