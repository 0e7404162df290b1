//! Canary Store: the storage collaborator for the web layer
//!
//! Holds publisher records and their three error collections, and answers
//! the read queries the site needs. The aggregation logic itself lives in
//! `canary-core`; this crate only loads and hands over plain data.

pub mod error;
pub mod memory;
pub mod model;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use model::{Publisher, SiteStats, Snapshot, SnapshotPublisher};
