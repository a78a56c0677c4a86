use chrono::Utc;

use crate::models::{Task, TaskDraft, TaskPatch, TaskStatus};
use crate::store::{EntityId, EntityStore, Latency, StoreResult};

const LIST_DELAY_MS: u64 = 280;

#[derive(Clone)]
pub struct TaskService {
    store: EntityStore<Task>,
}

impl TaskService {
    pub fn new(seed: Vec<Task>) -> Self {
        Self::with_latency(seed, Latency::simulated(LIST_DELAY_MS))
    }

    pub fn with_latency(seed: Vec<Task>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new(seed, latency),
        }
    }

    pub async fn get_all(&self) -> Vec<Task> {
        self.store.get_all().await
    }

    pub async fn get_by_id(&self, id: EntityId) -> StoreResult<Task> {
        self.store.get_by_id(id).await
    }

    /// A new task always starts Pending; the draft carries no status field.
    pub async fn create(&self, draft: TaskDraft) -> StoreResult<Task> {
        let task = Task {
            id: 0, // assigned by the store
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            assigned_to: draft.assigned_to,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        };
        self.store.create(task).await
    }

    pub async fn update(&self, id: EntityId, patch: TaskPatch) -> StoreResult<Task> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: EntityId) -> StoreResult<Task> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;
    use chrono::TimeZone;

    fn service() -> TaskService {
        TaskService::with_latency(Vec::new(), Latency::none())
    }

    #[tokio::test]
    async fn task_lifecycle_from_empty_store() {
        let service = service();

        // Create: fresh identity, status forced to pending.
        let created = service
            .create(TaskDraft {
                title: "Call back".to_string(),
                description: String::new(),
                due_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                priority: TaskPriority::High,
                assigned_to: "Sam".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, TaskStatus::Pending);

        // Update: only the patched field changes.
        let updated = service
            .update(
                1,
                TaskPatch {
                    status: Some(TaskStatus::Completed),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.due_date, created.due_date);
        assert_eq!(updated.priority, created.priority);
        assert_eq!(updated.assigned_to, created.assigned_to);

        // Delete, then get must fail.
        service.delete(1).await.unwrap();
        let err = service.get_by_id(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Task not found (id 1)");
    }

    #[tokio::test]
    async fn identities_stay_unique_across_creates() {
        let service = service();
        let mut ids = Vec::new();
        for i in 0..5 {
            let task = service
                .create(TaskDraft {
                    title: format!("task {i}"),
                    description: String::new(),
                    due_date: Utc::now(),
                    priority: TaskPriority::Medium,
                    assigned_to: "Sam".to_string(),
                })
                .await
                .unwrap();
            ids.push(task.id);
        }
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
