use chrono::Utc;

use crate::models::{Contact, ContactDraft, ContactPatch};
use crate::store::{EntityId, EntityStore, Latency, StoreResult};

/// Simulated list round-trip for the contact collection.
const LIST_DELAY_MS: u64 = 300;

#[derive(Clone)]
pub struct ContactService {
    store: EntityStore<Contact>,
}

impl ContactService {
    pub fn new(seed: Vec<Contact>) -> Self {
        Self::with_latency(seed, Latency::simulated(LIST_DELAY_MS))
    }

    pub fn with_latency(seed: Vec<Contact>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new(seed, latency),
        }
    }

    pub async fn get_all(&self) -> Vec<Contact> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: EntityId) -> StoreResult<Contact> {
        self.store.get_by_id(id).await
    }

    /// Stamps `created_at` and `last_activity` to now; defaults `status` to
    /// "active" and `tags` to empty when the caller omits them.
    pub async fn create(&self, draft: ContactDraft) -> StoreResult<Contact> {
        let now = Utc::now();
        let contact = Contact {
            id: 0, // assigned by the store
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            notes: draft.notes,
            status: draft.status.unwrap_or_else(|| "active".to_string()),
            tags: draft.tags.unwrap_or_default(),
            created_at: now,
            last_activity: Some(now),
        };
        self.store.create(contact).await
    }

    pub async fn update(&self, id: EntityId, patch: ContactPatch) -> StoreResult<Contact> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: EntityId) -> StoreResult<Contact> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn service() -> ContactService {
        ContactService::with_latency(Vec::new(), Latency::none())
    }

    fn draft(name: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..ContactDraft::default()
        }
    }

    #[tokio::test]
    async fn create_stamps_defaults() {
        let service = service();

        let contact = service.create(draft("Ada")).await.unwrap();
        assert_eq!(contact.id, 1);
        assert_eq!(contact.status, "active");
        assert!(contact.tags.is_empty());
        assert_eq!(contact.last_activity, Some(contact.created_at));
    }

    #[tokio::test]
    async fn create_keeps_caller_supplied_status_and_tags() {
        let service = service();

        let contact = service
            .create(ContactDraft {
                status: Some("inactive".to_string()),
                tags: Some(vec!["vip".to_string()]),
                ..draft("Ada")
            })
            .await
            .unwrap();
        assert_eq!(contact.status, "inactive");
        assert_eq!(contact.tags, vec!["vip".to_string()]);
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let service = service();

        let created = service.create(draft("Ada")).await.unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn not_found_carries_the_entity_name() {
        let service = service();
        let err = service.get_by_id(12).await.unwrap_err();
        assert_eq!(err.to_string(), "Contact not found (id 12)");
        assert!(matches!(err, StoreError::NotFound { id: 12, .. }));
    }
}
