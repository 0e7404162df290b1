//! Data Model: error records and per-publisher collections
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which check produced an error record.
///
/// `Download` and `Xml` mean the dataset could not be fetched or parsed at
/// all; `Validation` means it was fetched but failed a content check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Download,
    Xml,
    Validation,
}

impl ErrorCategory {
    /// Display label. Broken-fetch categories carry a leading underscore so
    /// that plain lexicographic ordering puts them ahead of `validation`.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::Download => "_download",
            ErrorCategory::Xml => "_xml",
            ErrorCategory::Validation => "validation",
        }
    }

    /// True for categories that mean the dataset cannot be fetched or parsed.
    pub fn is_broken(&self) -> bool {
        !matches!(self, ErrorCategory::Validation)
    }
}

/// A single error observed for one dataset of one publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetError {
    /// Opaque stable identity, usable for display
    pub id: Uuid,
    /// Identifies the dataset within its publisher
    pub dataset_id: String,
    /// Human-readable description from the last check
    pub message: String,
    /// True if the error was observed on the most recent check
    pub currently_erroring: bool,
    /// When the error was last observed
    pub last_errored_at: DateTime<Utc>,
}

impl DatasetError {
    /// New currently-erroring record, stamped now.
    pub fn new(dataset_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            dataset_id: dataset_id.into(),
            message: message.into(),
            currently_erroring: true,
            last_errored_at: Utc::now(),
        }
    }

    /// Mark the record as no longer observed on the latest check.
    pub fn resolved(mut self) -> Self {
        self.currently_erroring = false;
        self
    }
}

/// The three independent error collections a publisher owns.
///
/// Categories are separate collections, not one polymorphic list; an error
/// belongs to exactly one category for its whole life.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorCollections {
    #[serde(default)]
    pub download: Vec<DatasetError>,
    #[serde(default)]
    pub xml: Vec<DatasetError>,
    #[serde(default)]
    pub validation: Vec<DatasetError>,
}

impl ErrorCollections {
    /// Collections in the fixed precedence order the aggregator processes
    /// them: download, then xml, then validation.
    pub fn in_precedence_order(&self) -> [(ErrorCategory, &[DatasetError]); 3] {
        [
            (ErrorCategory::Download, &self.download),
            (ErrorCategory::Xml, &self.xml),
            (ErrorCategory::Validation, &self.validation),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.download.is_empty() && self.xml.is_empty() && self.validation.is_empty()
    }

    /// Total record count across all three categories.
    pub fn len(&self) -> usize {
        self.download.len() + self.xml.len() + self.validation.len()
    }
}
