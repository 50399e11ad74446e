//! Configuration for the normalization pipeline.
//!
//! [`NormalizeConfig`] switches individual pipeline stages on and off.
//! Every combination of toggles is valid; there is no validation error
//! path. The stage order itself is fixed and not configurable, because
//! downstream output stability depends on it.

use serde::{Deserialize, Serialize};

/// Per-stage toggles for [`normalize_with`](crate::normalize_with).
///
/// Cheap to copy and serializable, so hosts can carry it in their own
/// configuration files:
///
/// ```json
/// {
///   "collapse_repeats": true,
///   "strip_annotations": true,
///   "normalize_casing": true
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use normalizer::NormalizeConfig;
///
/// // Default: all three stages enabled.
/// let config = NormalizeConfig::default();
/// assert!(config.collapse_repeats);
/// assert!(config.strip_annotations);
/// assert!(config.normalize_casing);
///
/// // Keep stage directions, clean up everything else.
/// let keep_annotations = NormalizeConfig {
///     strip_annotations: false,
///     ..Default::default()
/// };
/// # let _ = keep_annotations;
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// If true, collapse repeated characters within words ("hellooo").
    pub collapse_repeats: bool,
    /// If true, remove `*stage direction*` annotations and repair the
    /// surrounding whitespace.
    pub strip_annotations: bool,
    /// If true, rewrite mixed-case words ("HeLLo") to sentence-style
    /// casing.
    pub normalize_casing: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            collapse_repeats: true,
            strip_annotations: true,
            normalize_casing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_every_stage() {
        let config = NormalizeConfig::default();
        assert!(config.collapse_repeats);
        assert!(config.strip_annotations);
        assert!(config.normalize_casing);
    }

    #[test]
    fn serde_round_trip() {
        let config = NormalizeConfig {
            collapse_repeats: true,
            strip_annotations: false,
            normalize_casing: true,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: NormalizeConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
