//! Static clinical knowledge for the 31 disease categories.
//!
//! The class-label list, advisory descriptions, and recommended laboratory
//! tests are all views over one canonical array of [`DiseaseEntry`] values
//! in model output order, so the three can never drift apart. Lookup by
//! label is still exposed with fixed fallback strings for absent keys.

mod entries;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use entries::DISEASES;

/// One disease category: its model label and the two authored text blocks.
#[derive(Debug)]
pub struct DiseaseEntry {
    /// The class label, in the position matching the model's output index.
    pub label: &'static str,
    /// Multi-line advisory text shown for this category.
    pub description: &'static str,
    /// Markdown-formatted list of recommended laboratory tests.
    pub lab_tests: &'static str,
}

/// Shown when a label has no entry in the description table.
pub const DESCRIPTION_FALLBACK: &str =
    "A detailed description is not available for this condition.";

/// Shown when a label has no entry in the lab-test table.
pub const LAB_TESTS_FALLBACK: &str =
    "Laboratory test information is not available for this condition.";

static LABEL_INDEX: Lazy<HashMap<&'static str, &'static DiseaseEntry>> =
    Lazy::new(|| DISEASES.iter().map(|entry| (entry.label, entry)).collect());

/// The class labels in model output order.
pub fn class_labels() -> Vec<&'static str> {
    DISEASES.iter().map(|entry| entry.label).collect()
}

/// The label for a model output index, if the index is in range.
pub fn label_for_index(index: usize) -> Option<&'static str> {
    DISEASES.get(index).map(|entry| entry.label)
}

/// Looks up the full entry for a label.
pub fn entry_for(label: &str) -> Option<&'static DiseaseEntry> {
    LABEL_INDEX.get(label).copied()
}

/// The advisory description for a label, or the fixed fallback.
pub fn description_for(label: &str) -> &'static str {
    entry_for(label)
        .map(|entry| entry.description)
        .unwrap_or(DESCRIPTION_FALLBACK)
}

/// The recommended laboratory tests for a label, or the fixed fallback.
pub fn lab_tests_for(label: &str) -> &'static str {
    entry_for(label)
        .map(|entry| entry.lab_tests)
        .unwrap_or(LAB_TESTS_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::NUM_CLASSES;

    #[test]
    fn every_label_has_both_text_blocks() {
        assert_eq!(DISEASES.len(), NUM_CLASSES);
        for entry in DISEASES.iter() {
            assert!(!entry.label.is_empty());
            assert!(
                !entry.description.is_empty(),
                "missing description for {}",
                entry.label
            );
            assert!(
                !entry.lab_tests.is_empty(),
                "missing lab tests for {}",
                entry.label
            );
        }
    }

    #[test]
    fn labels_are_unique() {
        assert_eq!(LABEL_INDEX.len(), DISEASES.len());
    }

    #[test]
    fn lookup_matches_index_order() {
        assert_eq!(label_for_index(20), Some("Psoriasis"));
        assert_eq!(label_for_index(0), Some("Basal Cell Carcinoma"));
        assert_eq!(label_for_index(NUM_CLASSES), None);
    }

    #[test]
    fn known_label_returns_stored_text() {
        let description = description_for("Psoriasis");
        assert!(description.starts_with("1. Psoriasis is a chronic autoimmune condition"));
        let labs = lab_tests_for("Psoriasis");
        assert!(labs.contains("CRP/ESR"));
    }

    #[test]
    fn absent_label_falls_back() {
        assert_eq!(description_for("No Such Disease"), DESCRIPTION_FALLBACK);
        assert_eq!(lab_tests_for("No Such Disease"), LAB_TESTS_FALLBACK);
    }
}
