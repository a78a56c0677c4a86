use chrono::Utc;

use crate::models::{Activity, ActivityDraft, ActivityPatch};
use crate::store::{EntityId, EntityStore, Latency, StoreResult};

const LIST_DELAY_MS: u64 = 320;

#[derive(Clone)]
pub struct ActivityService {
    store: EntityStore<Activity>,
}

impl ActivityService {
    pub fn new(seed: Vec<Activity>) -> Self {
        Self::with_latency(seed, Latency::simulated(LIST_DELAY_MS))
    }

    pub fn with_latency(seed: Vec<Activity>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new(seed, latency),
        }
    }

    /// Newest first. The only listing that does not follow insertion order.
    pub async fn get_all(&self) -> Vec<Activity> {
        let mut activities = self.store.get_all().await;
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        activities
    }

    pub async fn get_by_id(&self, id: EntityId) -> StoreResult<Activity> {
        self.store.get_by_id(id).await
    }

    /// Stamps `timestamp` to now; the draft carries none, so a caller can
    /// never back-date a new entry.
    pub async fn create(&self, draft: ActivityDraft) -> StoreResult<Activity> {
        let activity = Activity {
            id: 0, // assigned by the store
            kind: draft.kind,
            contact_id: draft.contact_id,
            description: draft.description,
            outcome: draft.outcome,
            timestamp: Utc::now(),
            metadata: draft.metadata,
        };
        self.store.create(activity).await
    }

    pub async fn update(&self, id: EntityId, patch: ActivityPatch) -> StoreResult<Activity> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: EntityId) -> StoreResult<Activity> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use chrono::{Duration, Utc};
    use std::collections::BTreeMap;

    fn entry(id: EntityId, hours_ago: i64) -> Activity {
        Activity {
            id,
            kind: ActivityType::Note,
            contact_id: 1,
            description: format!("entry {id}"),
            outcome: None,
            timestamp: Utc::now() - Duration::hours(hours_ago),
            metadata: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn get_all_sorts_newest_first() {
        // Seed deliberately out of timestamp order.
        let service = ActivityService::with_latency(
            vec![entry(1, 5), entry(2, 1), entry(3, 10)],
            Latency::none(),
        );

        let all = service.get_all().await;
        let ids: Vec<EntityId> = all.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert!(all.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn create_stamps_timestamp_and_lands_first() {
        let service =
            ActivityService::with_latency(vec![entry(1, 5), entry(2, 1)], Latency::none());

        let before = Utc::now();
        let created = service
            .create(ActivityDraft {
                kind: ActivityType::Call,
                contact_id: 2,
                description: "Follow-up call".to_string(),
                outcome: Some("left voicemail".to_string()),
                metadata: BTreeMap::new(),
            })
            .await
            .unwrap();
        assert!(created.timestamp >= before);
        assert_eq!(created.id, 3);

        let all = service.get_all().await;
        assert_eq!(all[0].id, 3);
    }

    #[tokio::test]
    async fn metadata_survives_the_round_trip() {
        let service = ActivityService::with_latency(Vec::new(), Latency::none());

        let mut metadata = BTreeMap::new();
        metadata.insert("duration".to_string(), "30m".to_string());

        let created = service
            .create(ActivityDraft {
                kind: ActivityType::Meeting,
                contact_id: 1,
                description: "Demo".to_string(),
                outcome: None,
                metadata,
            })
            .await
            .unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.metadata.get("duration"), Some(&"30m".to_string()));
    }
}
