use std::borrow::Cow;

use tracing::debug;

use crate::annotations::strip_annotations;
use crate::casing::normalize_casing;
use crate::config::NormalizeConfig;
use crate::repeats::collapse_repeats;

/// Runs the full normalization pipeline with the default configuration.
///
/// Stage order is fixed: repeated-character collapsing, then annotation
/// removal, then casing repair. Each stage consumes the complete output
/// of the previous one. Total for every input; the empty string comes
/// back unchanged.
///
/// ```rust
/// use normalizer::normalize;
///
/// assert_eq!(
///     normalize("It's a niiice *laughs* day!"),
///     "It's a nice day!"
/// );
/// ```
pub fn normalize(text: &str) -> String {
    normalize_with(text, &NormalizeConfig::default())
}

/// Runs the normalization pipeline with per-stage toggles.
///
/// Disabled stages are skipped without allocating; with every stage
/// disabled this is the identity function. `normalize(text)` is
/// equivalent to `normalize_with(text, &NormalizeConfig::default())`.
pub fn normalize_with(text: &str, cfg: &NormalizeConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let collapsed = if cfg.collapse_repeats {
        collapse_repeats(text)
    } else {
        Cow::Borrowed(text)
    };
    let stripped = if cfg.strip_annotations {
        strip_annotations(&collapsed)
    } else {
        Cow::Borrowed(collapsed.as_ref())
    };
    let cased = if cfg.normalize_casing {
        normalize_casing(&stripped)
    } else {
        Cow::Borrowed(stripped.as_ref())
    };

    debug!(
        input_len = text.len(),
        collapsed_len = collapsed.len(),
        stripped_len = stripped.len(),
        output_len = cased.len(),
        "normalize_complete"
    );

    cased.into_owned()
}
