//! Publisher records, seed snapshots, and site-wide numbers
use canary_core::ErrorCollections;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An organization that publishes datasets tracked by the canary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publisher {
    /// Registry short name, e.g. "worldbank"
    pub id: String,
    /// Display title
    pub name: String,
    /// How many datasets the publisher currently lists
    pub total_datasets: u32,
    /// Date of the publisher's earliest dataset, if known
    pub first_published: Option<NaiveDate>,
}

/// One publisher with its error collections, as stored in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPublisher {
    pub publisher: Publisher,
    #[serde(default)]
    pub errors: ErrorCollections,
}

/// Seed document for [`crate::MemoryStore::load_json`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub publishers: Vec<SnapshotPublisher>,
}

/// Aggregate numbers for the home page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SiteStats {
    /// Publishers tracked
    pub publishers: usize,
    /// Publishers with a currently-erroring download or xml error
    pub publishers_broken: usize,
    /// Publishers whose only current errors are validation failures
    pub publishers_invalid: usize,
    /// Datasets currently erroring, across all publishers
    pub datasets_erroring: usize,
}
