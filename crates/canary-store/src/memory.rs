//! In-memory publisher store
//!
//! Backs the site in tests and small deployments. Reads hand out clones so
//! callers never observe a half-applied write; the aggregator treats its
//! inputs as read-only anyway.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use canary_core::{
    badge_status, summarize, BadgeStatus, DatasetError, ErrorCategory, ErrorCollections,
};

use crate::error::StoreError;
use crate::model::{Publisher, SiteStats, Snapshot};

struct PublisherEntry {
    publisher: Publisher,
    errors: ErrorCollections,
}

/// Thread-safe in-memory store keyed by publisher id.
pub struct MemoryStore {
    inner: RwLock<HashMap<String, PublisherEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store from a seed snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().expect("store lock poisoned");
            for entry in snapshot.publishers {
                inner.insert(
                    entry.publisher.id.clone(),
                    PublisherEntry {
                        publisher: entry.publisher,
                        errors: entry.errors,
                    },
                );
            }
        }
        store
    }

    /// Load a seed snapshot from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Insert the publisher, or replace its record while keeping its errors.
    pub fn upsert_publisher(&self, publisher: Publisher) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        match inner.get_mut(&publisher.id) {
            Some(entry) => entry.publisher = publisher,
            None => {
                inner.insert(
                    publisher.id.clone(),
                    PublisherEntry {
                        publisher,
                        errors: ErrorCollections::default(),
                    },
                );
            }
        }
    }

    /// Append an error to one of the publisher's three collections.
    pub fn push_error(
        &self,
        publisher_id: &str,
        category: ErrorCategory,
        error: DatasetError,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let entry = inner
            .get_mut(publisher_id)
            .ok_or_else(|| StoreError::PublisherNotFound(publisher_id.to_string()))?;
        match category {
            ErrorCategory::Download => entry.errors.download.push(error),
            ErrorCategory::Xml => entry.errors.xml.push(error),
            ErrorCategory::Validation => entry.errors.validation.push(error),
        }
        Ok(())
    }

    pub fn publisher(&self, publisher_id: &str) -> Option<Publisher> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.get(publisher_id).map(|e| e.publisher.clone())
    }

    /// The publisher's error collections; `None` iff the publisher is
    /// unknown, which is how the badge endpoint tells `not_found` apart
    /// from `success`.
    pub fn errors(&self, publisher_id: &str) -> Option<ErrorCollections> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.get(publisher_id).map(|e| e.errors.clone())
    }

    /// Ids of all tracked publishers, sorted.
    pub fn publisher_ids(&self) -> Vec<String> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut ids: Vec<String> = inner.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// All publishers, sorted by display name.
    pub fn publishers(&self) -> Vec<Publisher> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut publishers: Vec<Publisher> =
            inner.values().map(|e| e.publisher.clone()).collect();
        publishers.sort_by(|a, b| a.name.cmp(&b.name));
        publishers
    }

    /// Home-page numbers, derived through the core aggregator so they stay
    /// consistent with the per-publisher pages.
    pub fn stats(&self) -> SiteStats {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut stats = SiteStats {
            publishers: inner.len(),
            ..SiteStats::default()
        };
        for entry in inner.values() {
            match badge_status(&entry.errors) {
                BadgeStatus::Errors => stats.publishers_broken += 1,
                BadgeStatus::Invalid => stats.publishers_invalid += 1,
                BadgeStatus::Success | BadgeStatus::NotFound => {}
            }
            let summary = summarize(&entry.errors);
            stats.datasets_erroring += summary.broken_count + summary.validation_count;
        }
        stats
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
