//! Error Aggregator: per-dataset selection, ordering, and counts
//!
//! Merges a publisher's three error collections into one display list with
//! at most one entry per dataset, plus the two headline counts shown on the
//! publisher page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{DatasetError, ErrorCategory, ErrorCollections};

/// Output of [`summarize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorSummary {
    /// One `(category, error)` pair per distinct dataset, display-ordered:
    /// currently-erroring entries first, then by category label.
    pub errors: Vec<(ErrorCategory, DatasetError)>,
    /// Selected entries that are currently erroring in a broken category
    /// (download or xml).
    pub broken_count: usize,
    /// Selected entries that are currently erroring in the validation
    /// category.
    pub validation_count: usize,
}

impl ErrorSummary {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Merge the three collections into one entry per dataset.
///
/// Collections are processed in precedence order (download, xml,
/// validation). The first error seen for a dataset becomes its provisional
/// entry; a later error replaces it only while the provisional entry is not
/// currently erroring. Once a currently-erroring entry is selected for a
/// dataset it is never replaced, not even by another currently-erroring
/// entry from a later category.
///
/// The final list is sorted currently-erroring first, then by category
/// label; the labels are prefixed (`_download`, `_xml`, `validation`) so
/// broken-fetch entries sort ahead of validation entries. The sort is
/// stable, so datasets keep their first-seen order within a tie.
pub fn summarize(collections: &ErrorCollections) -> ErrorSummary {
    let mut selected: Vec<(ErrorCategory, DatasetError)> = Vec::new();
    let mut slot_by_dataset: HashMap<&str, usize> = HashMap::new();

    for (category, errors) in collections.in_precedence_order() {
        for error in errors {
            match slot_by_dataset.get(error.dataset_id.as_str()) {
                None => {
                    slot_by_dataset.insert(&error.dataset_id, selected.len());
                    selected.push((category, error.clone()));
                }
                Some(&slot) => {
                    if selected[slot].1.currently_erroring {
                        continue;
                    }
                    selected[slot] = (category, error.clone());
                }
            }
        }
    }

    selected.sort_by_key(|(category, error)| (!error.currently_erroring, category.label()));

    let broken_count = selected
        .iter()
        .filter(|(category, error)| error.currently_erroring && category.is_broken())
        .count();
    let validation_count = selected
        .iter()
        .filter(|(category, error)| error.currently_erroring && !category.is_broken())
        .count();

    ErrorSummary {
        errors: selected,
        broken_count,
        validation_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(dataset_id: &str, erroring: bool) -> DatasetError {
        let error = DatasetError::new(dataset_id, "check failed");
        if erroring {
            error
        } else {
            error.resolved()
        }
    }

    #[test]
    fn test_empty_collections() {
        let summary = summarize(&ErrorCollections::default());
        assert!(summary.is_empty());
        assert_eq!(summary.broken_count, 0);
        assert_eq!(summary.validation_count, 0);
    }

    #[test]
    fn test_one_entry_per_dataset() {
        let collections = ErrorCollections {
            download: vec![err("a", true), err("b", false)],
            xml: vec![err("a", true), err("b", true)],
            validation: vec![err("a", true), err("c", true)],
        };

        let summary = summarize(&collections);
        let mut ids: Vec<&str> = summary
            .errors
            .iter()
            .map(|(_, e)| e.dataset_id.as_str())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_erroring_download_is_sticky() {
        // Scenario: download(a, erroring) + validation(a, erroring)
        let collections = ErrorCollections {
            download: vec![err("a", true)],
            xml: vec![],
            validation: vec![err("a", true)],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].0, ErrorCategory::Download);
        assert_eq!(summary.broken_count, 1);
        assert_eq!(summary.validation_count, 0);
    }

    #[test]
    fn test_resolved_entry_is_replaced() {
        // Scenario: download(b, resolved) + validation(b, erroring)
        let collections = ErrorCollections {
            download: vec![err("b", false)],
            xml: vec![],
            validation: vec![err("b", true)],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].0, ErrorCategory::Validation);
        assert_eq!(summary.broken_count, 0);
        assert_eq!(summary.validation_count, 1);
    }

    #[test]
    fn test_resolved_entry_replaced_by_resolved() {
        // Replacement does not require the newcomer to be erroring; it only
        // requires the provisional entry not to be.
        let collections = ErrorCollections {
            download: vec![err("c", false)],
            xml: vec![err("c", false)],
            validation: vec![],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors[0].0, ErrorCategory::Xml);
    }

    #[test]
    fn test_erroring_xml_not_replaced_by_validation() {
        let collections = ErrorCollections {
            download: vec![],
            xml: vec![err("d", true)],
            validation: vec![err("d", true)],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors[0].0, ErrorCategory::Xml);
    }

    #[test]
    fn test_erroring_entries_sort_first() {
        let collections = ErrorCollections {
            download: vec![err("quiet", false)],
            xml: vec![],
            validation: vec![err("loud", true)],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors[0].1.dataset_id, "loud");
        assert_eq!(summary.errors[1].1.dataset_id, "quiet");
    }

    #[test]
    fn test_category_label_breaks_ties() {
        // Among erroring entries, _download < _xml < validation.
        let collections = ErrorCollections {
            download: vec![err("dl", true)],
            xml: vec![err("xm", true)],
            validation: vec![err("va", true)],
        };

        let summary = summarize(&collections);
        let labels: Vec<&str> = summary.errors.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(labels, vec!["_download", "_xml", "validation"]);
    }

    #[test]
    fn test_stable_within_equal_keys() {
        let collections = ErrorCollections {
            download: vec![err("first", true), err("second", true)],
            xml: vec![],
            validation: vec![],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors[0].1.dataset_id, "first");
        assert_eq!(summary.errors[1].1.dataset_id, "second");
    }

    #[test]
    fn test_counts_ignore_resolved_entries() {
        let collections = ErrorCollections {
            download: vec![err("a", true), err("b", false)],
            xml: vec![err("c", false)],
            validation: vec![err("d", true), err("e", false)],
        };

        let summary = summarize(&collections);
        assert_eq!(summary.errors.len(), 5);
        assert_eq!(summary.broken_count, 1);
        assert_eq!(summary.validation_count, 1);
    }

    #[test]
    fn test_counts_partition_erroring_entries() {
        let collections = ErrorCollections {
            download: vec![err("a", true)],
            xml: vec![err("b", true)],
            validation: vec![err("c", true), err("d", true)],
        };

        let summary = summarize(&collections);
        let erroring = summary
            .errors
            .iter()
            .filter(|(_, e)| e.currently_erroring)
            .count();
        assert_eq!(summary.broken_count + summary.validation_count, erroring);
        assert_eq!(summary.broken_count, 2);
        assert_eq!(summary.validation_count, 2);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let collections = ErrorCollections {
            download: vec![err("a", false)],
            xml: vec![err("a", true)],
            validation: vec![],
        };

        let _ = summarize(&collections);
        assert_eq!(collections.download.len(), 1);
        assert_eq!(collections.xml.len(), 1);
    }
}
