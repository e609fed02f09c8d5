use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use billing_client::domain::PricePerUnit;
use tokio::sync::RwLock;

use super::{PriceTable, Record, RecordStore, StoreError};

/// In-process table keyed by id. Ids start at 1 and are never reused.
pub struct MemoryTable<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    last_id: AtomicI64,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }
}

#[async_trait::async_trait]
impl<T: Record> RecordStore<T> for MemoryTable<T> {
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<T>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = T::from_draft(id, draft);
        self.rows.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &T) -> Result<Option<T>, StoreError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}

#[async_trait::async_trait]
impl PriceTable for MemoryTable<PricePerUnit> {
    async fn price_for(&self, units: f64) -> Result<Option<f64>, StoreError> {
        // BTreeMap iterates in id order, so overlapping tiers resolve to the lowest id.
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|tier| tier.covers(units))
            .map(|tier| tier.price))
    }
}
