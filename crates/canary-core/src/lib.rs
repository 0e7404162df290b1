//! Canary Core: error records, aggregation, and badge status
//!
//! Pure domain logic for the dataset canary. A publisher owns three
//! independent error collections (download, xml, validation); this crate
//! merges them into one per-dataset summary and derives the publisher badge.
//! No I/O, no shared state: callers load the collections and pass them in.
//!
//! # Example
//!
//! ```
//! use canary_core::{DatasetError, ErrorCollections, summarize, badge_status, BadgeStatus};
//!
//! let mut collections = ErrorCollections::default();
//! collections.download.push(DatasetError::new("pub-activities", "HTTP 404"));
//!
//! let summary = summarize(&collections);
//! assert_eq!(summary.broken_count, 1);
//! assert_eq!(badge_status(&collections), BadgeStatus::Errors);
//! ```

pub mod aggregate;
pub mod badge;
pub mod model;

pub use aggregate::{summarize, ErrorSummary};
pub use badge::{badge_status, BadgeStatus};
pub use model::{DatasetError, ErrorCategory, ErrorCollections};

/// Version of the canary engine
pub const CANARY_VERSION: &str = "0.1.0";
