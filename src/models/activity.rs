use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Entity, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
    #[default]
    Note,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Meeting => "meeting",
            Self::Note => "note",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "call" => Some(Self::Call),
            "email" => Some(Self::Email),
            "meeting" => Some(Self::Meeting),
            "note" => Some(Self::Note),
            _ => None,
        }
    }
}

/// One logged touchpoint with a contact. The only entity kind whose listing
/// contract is not insertion order: newest first by `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "Id")]
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub contact_id: EntityId,
    pub description: String,
    #[serde(default)]
    pub outcome: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Create payload. No timestamp: the service stamps it at creation time,
/// whatever the caller had in mind.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
    pub kind: ActivityType,
    pub contact_id: EntityId,
    pub description: String,
    pub outcome: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub kind: Option<ActivityType>,
    pub contact_id: Option<EntityId>,
    pub description: Option<String>,
    /// `Some(None)` clears the field.
    pub outcome: Option<Option<String>>,
    pub timestamp: Option<DateTime<Utc>>,
    pub metadata: Option<BTreeMap<String, String>>,
}

impl Entity for Activity {
    const NAME: &'static str = "Activity";
    type Patch = ActivityPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply(&mut self, patch: ActivityPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(contact_id) = patch.contact_id {
            self.contact_id = contact_id;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(outcome) = patch.outcome {
            self.outcome = outcome;
        }
        if let Some(timestamp) = patch.timestamp {
            self.timestamp = timestamp;
        }
        if let Some(metadata) = patch.metadata {
            self.metadata = metadata;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parse() {
        assert_eq!(ActivityType::parse("Call"), Some(ActivityType::Call));
        assert_eq!(ActivityType::parse("fax"), None);
    }

    #[test]
    fn test_serde_type_field_name() {
        let json = r#"{
            "Id": 9,
            "type": "meeting",
            "contactId": 2,
            "description": "Quarterly review",
            "timestamp": "2024-02-01T15:30:00Z"
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.kind, ActivityType::Meeting);
        assert_eq!(activity.contact_id, 2);
        assert!(activity.outcome.is_none());
        assert!(activity.metadata.is_empty());
    }

    #[test]
    fn test_patch_clears_outcome() {
        let mut activity = Activity {
            id: 1,
            kind: ActivityType::Call,
            contact_id: 4,
            description: "Intro call".to_string(),
            outcome: Some("positive".to_string()),
            timestamp: Utc::now(),
            metadata: BTreeMap::new(),
        };

        activity.apply(ActivityPatch {
            outcome: Some(None),
            ..ActivityPatch::default()
        });

        assert!(activity.outcome.is_none());
        assert_eq!(activity.description, "Intro call");
    }
}
