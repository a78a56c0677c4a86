use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;

/// Identity assigned by a store at creation time. Positive, unique within
/// one entity collection, never reassigned.
pub type EntityId = u32;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: EntityId },
}

/// One record kind managed by an [`EntityStore`].
pub trait Entity: Clone + Send + 'static {
    /// Singular display name used in error messages ("Contact", "Deal", ...).
    const NAME: &'static str;

    /// Partial update payload. Fields left unset keep their current value.
    type Patch: Send;

    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);

    /// Shallow field merge: replace each field the patch carries.
    fn apply(&mut self, patch: Self::Patch);
}

/// Simulated network round-trip per operation. Purely cosmetic; carries no
/// retry or timeout semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    /// The profile the mock API uses: list varies per entity kind, the
    /// mutating operations share fixed delays.
    pub const fn simulated(list_ms: u64) -> Self {
        Self {
            list: Duration::from_millis(list_ms),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
        }
    }

    /// No artificial delay; operations resolve immediately. Used by tests
    /// and the `--no-delay` flag.
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

/// In-memory collection of one entity kind with CRUD primitives.
///
/// The backing `Vec` preserves insertion order and is shared behind an
/// `Arc`, so cloned handles operate on the same collection. Every operation
/// returns clones; callers can never reach the internal records by
/// reference. The simulated delay is awaited *before* the lock is taken and
/// the read-modify-write section contains no suspension point, so mutations
/// are atomic with respect to each other.
#[derive(Clone)]
pub struct EntityStore<T: Entity> {
    records: Arc<Mutex<Vec<T>>>,
    latency: Latency,
}

impl<T: Entity> EntityStore<T> {
    /// Create a store seeded with an initial dataset. No ambient globals:
    /// every store instance owns its own collection.
    pub fn new(seed: Vec<T>, latency: Latency) -> Self {
        Self {
            records: Arc::new(Mutex::new(seed)),
            latency,
        }
    }

    /// Every record, in insertion order. Never fails.
    pub async fn get_all(&self) -> Vec<T> {
        pause(self.latency.list).await;
        self.records.lock().await.clone()
    }

    pub async fn get_by_id(&self, id: EntityId) -> StoreResult<T> {
        pause(self.latency.get).await;
        let records = self.records.lock().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound { entity: T::NAME, id })
    }

    /// Append a record, assigning its identity. Identities come from the
    /// currently-present records only: `max + 1`, or 1 when the collection
    /// is empty. Deleting the highest id and creating again therefore
    /// reuses that id.
    pub async fn create(&self, mut record: T) -> StoreResult<T> {
        pause(self.latency.create).await;
        let mut records = self.records.lock().await;
        let id = records.iter().map(|r| r.id()).max().map_or(1, |max| max + 1);
        record.set_id(id);
        records.push(record.clone());
        Ok(record)
    }

    /// Shallow-merge the patch over the record in place and return a copy.
    pub async fn update(&self, id: EntityId, patch: T::Patch) -> StoreResult<T> {
        pause(self.latency.update).await;
        let mut records = self.records.lock().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound { entity: T::NAME, id })?;
        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove the record and return its last-known snapshot.
    pub async fn delete(&self, id: EntityId) -> StoreResult<T> {
        pause(self.latency.delete).await;
        let mut records = self.records.lock().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound { entity: T::NAME, id })?;
        Ok(records.remove(index))
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
