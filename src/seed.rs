//! Embedded demo datasets, parsed once at startup. There is no on-disk
//! persistence: edits live only as long as the process.

use serde_json::Result;

use crate::models::{Activity, Contact, Deal, Task};

const CONTACTS_JSON: &str = include_str!("../data/contacts.json");
const DEALS_JSON: &str = include_str!("../data/deals.json");
const TASKS_JSON: &str = include_str!("../data/tasks.json");
const ACTIVITIES_JSON: &str = include_str!("../data/activities.json");

/// Initial state for all four collections.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub tasks: Vec<Task>,
    pub activities: Vec<Activity>,
}

impl SeedData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            contacts: serde_json::from_str(CONTACTS_JSON)?,
            deals: serde_json::from_str(DEALS_JSON)?,
            tasks: serde_json::from_str(TASKS_JSON)?,
            activities: serde_json::from_str(ACTIVITIES_JSON)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityId;

    fn assert_unique_positive_ids(ids: &[EntityId]) {
        let mut sorted = ids.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len(), "duplicate ids in seed data");
        assert!(ids.iter().all(|&id| id >= 1));
    }

    #[test]
    fn test_embedded_datasets_parse() {
        let seed = SeedData::load().unwrap();
        assert!(!seed.contacts.is_empty());
        assert!(!seed.deals.is_empty());
        assert!(!seed.tasks.is_empty());
        assert!(!seed.activities.is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique_within_each_collection() {
        let seed = SeedData::load().unwrap();
        assert_unique_positive_ids(&seed.contacts.iter().map(|c| c.id).collect::<Vec<_>>());
        assert_unique_positive_ids(&seed.deals.iter().map(|d| d.id).collect::<Vec<_>>());
        assert_unique_positive_ids(&seed.tasks.iter().map(|t| t.id).collect::<Vec<_>>());
        assert_unique_positive_ids(&seed.activities.iter().map(|a| a.id).collect::<Vec<_>>());
    }
}
