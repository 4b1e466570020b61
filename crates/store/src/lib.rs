//! In-memory storage for the business records.
//!
//! This crate provides:
//! - `BusinessStore`, the shared handle every request works through
//! - The demonstration data set the store starts from
//! - Repositories that apply core operations under the store lock

pub mod repositories;
pub mod seed;

pub use repositories::{AccountingRepository, HrRepository, ReportRepository};

use std::sync::Arc;

use nexus_core::BusinessData;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, lock-guarded business data.
///
/// Clones share the same data. Each repository operation holds the write
/// lock for its whole duration, so a status change and the ledger entry it
/// books are observed together or not at all.
#[derive(Debug, Clone, Default)]
pub struct BusinessStore {
    inner: Arc<RwLock<BusinessData>>,
}

impl BusinessStore {
    /// Creates a store holding the given data.
    #[must_use]
    pub fn new(data: BusinessData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// Creates a store holding the demonstration data set.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::initial_data())
    }

    /// Acquires shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, BusinessData> {
        self.inner.read().await
    }

    /// Acquires exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, BusinessData> {
        self.inner.write().await
    }

    /// Returns a copy of the current data.
    pub async fn snapshot(&self) -> BusinessData {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = BusinessStore::default();
        let other = store.clone();

        store.write().await.candidates.clear();
        other.write().await.job_proformas.clear();

        assert_eq!(store.snapshot().await, other.snapshot().await);
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = BusinessStore::seeded();
        assert_eq!(store.read().await.chart_of_accounts.len(), 15);
    }
}
