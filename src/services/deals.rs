use chrono::Utc;

use crate::models::{Deal, DealDraft, DealPatch};
use crate::store::{EntityId, EntityStore, Latency, StoreResult};

const LIST_DELAY_MS: u64 = 350;

#[derive(Clone)]
pub struct DealService {
    store: EntityStore<Deal>,
}

impl DealService {
    pub fn new(seed: Vec<Deal>) -> Self {
        Self::with_latency(seed, Latency::simulated(LIST_DELAY_MS))
    }

    pub fn with_latency(seed: Vec<Deal>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new(seed, latency),
        }
    }

    pub async fn get_all(&self) -> Vec<Deal> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: EntityId) -> StoreResult<Deal> {
        self.store.get_by_id(id).await
    }

    /// Stamps `created_at` only. Coercing value/probability into range is
    /// the caller's job, not this facade's.
    pub async fn create(&self, draft: DealDraft) -> StoreResult<Deal> {
        let deal = Deal {
            id: 0, // assigned by the store
            title: draft.title,
            value: draft.value,
            stage: draft.stage,
            contact_id: draft.contact_id,
            probability: draft.probability,
            expected_close: draft.expected_close,
            created_at: Utc::now(),
        };
        self.store.create(deal).await
    }

    pub async fn update(&self, id: EntityId, patch: DealPatch) -> StoreResult<Deal> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: EntityId) -> StoreResult<Deal> {
        self.store.delete(id).await
    }
}
