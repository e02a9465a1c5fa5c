//! The fixed set of saliency methods under study.
//!
//! Method names are wire-level identifiers: they key the per-folder heatmap
//! assets (`heatmap_{method}.jpg`) and are stored verbatim in vote records.
//! Participants never see which method produced which heatmap; the study is
//! blinded by shuffling the presentation order per request (see
//! [`crate::shuffle`]).

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Method constants
// ---------------------------------------------------------------------------

pub const METHOD_BEYOND_INTUITION: &str = "beyond_intuition";
pub const METHOD_GRADCAM: &str = "gradcam";
pub const METHOD_INTEGRATED_GRADIENT: &str = "integrated_gradient";
/// The authors' own method, deliberately unlabeled like the rest.
pub const METHOD_OUR: &str = "our";
pub const METHOD_ROLLOUT: &str = "rollout";

/// All methods in the study, in declaration order.
///
/// Every assignment response contains each of these exactly once.
pub const HEATMAP_METHODS: &[&str] = &[
    METHOD_BEYOND_INTUITION,
    METHOD_GRADCAM,
    METHOD_INTEGRATED_GRADIENT,
    METHOD_OUR,
    METHOD_ROLLOUT,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a submitted method name is one of the fixed set.
///
/// Votes for unknown methods are rejected so the stored records stay clean.
pub fn validate_method(method: &str) -> Result<(), CoreError> {
    if HEATMAP_METHODS.contains(&method) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown heatmap method '{}'. Must be one of: {:?}",
            method, HEATMAP_METHODS
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_methods_are_valid() {
        for m in HEATMAP_METHODS {
            assert!(validate_method(m).is_ok(), "Method '{m}' should be valid");
        }
    }

    #[test]
    fn unknown_method_is_invalid() {
        assert!(validate_method("lime").is_err());
        assert!(validate_method("").is_err());
    }

    #[test]
    fn method_casing_is_exact() {
        assert!(validate_method("GradCAM").is_err());
        assert!(validate_method("Gradcam").is_err());
    }

    #[test]
    fn method_set_has_no_duplicates() {
        for (i, a) in HEATMAP_METHODS.iter().enumerate() {
            for b in &HEATMAP_METHODS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
