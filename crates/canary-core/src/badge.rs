//! Badge status derivation
//!
//! The publisher badge summarizes current health in one of four states.
//! Only currently-erroring records count; historical errors never change
//! the badge.

use serde::{Deserialize, Serialize};

use crate::model::{DatasetError, ErrorCollections};

/// Publisher-level badge state. Each value maps to one static SVG asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStatus {
    /// A download or xml error is currently observed
    Errors,
    /// Only validation errors are currently observed
    Invalid,
    /// Nothing currently erroring
    Success,
    /// The publisher is unknown to the system
    NotFound,
}

impl BadgeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStatus::Errors => "errors",
            BadgeStatus::Invalid => "invalid",
            BadgeStatus::Success => "success",
            BadgeStatus::NotFound => "not_found",
        }
    }

    /// File name of the badge asset for this status.
    pub fn svg_file(&self) -> String {
        format!("{}.svg", self.as_str())
    }
}

impl std::fmt::Display for BadgeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the badge status for a known publisher.
///
/// A currently-erroring download or xml record wins over everything else;
/// validation records only matter when nothing is broken. [`BadgeStatus::NotFound`]
/// is the caller's to produce when the publisher lookup itself fails.
pub fn badge_status(collections: &ErrorCollections) -> BadgeStatus {
    let any_erroring = |errors: &[DatasetError]| errors.iter().any(|e| e.currently_erroring);

    if any_erroring(&collections.download) || any_erroring(&collections.xml) {
        BadgeStatus::Errors
    } else if any_erroring(&collections.validation) {
        BadgeStatus::Invalid
    } else {
        BadgeStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatasetError;

    #[test]
    fn test_no_errors_is_success() {
        assert_eq!(
            badge_status(&ErrorCollections::default()),
            BadgeStatus::Success
        );
    }

    #[test]
    fn test_resolved_errors_are_ignored() {
        let collections = ErrorCollections {
            download: vec![DatasetError::new("a", "HTTP 500").resolved()],
            xml: vec![],
            validation: vec![DatasetError::new("b", "bad element").resolved()],
        };
        assert_eq!(badge_status(&collections), BadgeStatus::Success);
    }

    #[test]
    fn test_validation_only_is_invalid() {
        let collections = ErrorCollections {
            download: vec![],
            xml: vec![],
            validation: vec![DatasetError::new("a", "schema violation")],
        };
        assert_eq!(badge_status(&collections), BadgeStatus::Invalid);
    }

    #[test]
    fn test_broken_beats_validation() {
        let collections = ErrorCollections {
            download: vec![],
            xml: vec![DatasetError::new("a", "not well-formed")],
            validation: vec![DatasetError::new("b", "schema violation")],
        };
        assert_eq!(badge_status(&collections), BadgeStatus::Errors);
    }

    #[test]
    fn test_svg_file_names() {
        assert_eq!(BadgeStatus::Errors.svg_file(), "errors.svg");
        assert_eq!(BadgeStatus::Invalid.svg_file(), "invalid.svg");
        assert_eq!(BadgeStatus::Success.svg_file(), "success.svg");
        assert_eq!(BadgeStatus::NotFound.svg_file(), "not_found.svg");
    }
}
