use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(default)]
    pub notes: String,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Create payload. The service stamps `created_at`/`last_activity` and the
/// store assigns the identity.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
    /// Defaults to "active" when omitted.
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Partial update. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    /// `Some(None)` clears the field.
    pub last_activity: Option<Option<DateTime<Utc>>>,
}

impl Entity for Contact {
    const NAME: &'static str = "Contact";
    type Patch = ContactPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(last_activity) = patch.last_activity {
            self.last_activity = last_activity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merges_shallowly() {
        let mut contact = Contact {
            id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            company: "Analytical Engines".to_string(),
            notes: String::new(),
            status: "active".to_string(),
            tags: vec!["vip".to_string()],
            created_at: Utc::now(),
            last_activity: Some(Utc::now()),
        };

        contact.apply(ContactPatch {
            email: Some("ada@engines.example".to_string()),
            last_activity: Some(None),
            ..ContactPatch::default()
        });

        assert_eq!(contact.email, "ada@engines.example");
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.tags, vec!["vip".to_string()]);
        assert!(contact.last_activity.is_none());
    }

    #[test]
    fn test_serde_shape_matches_mock_data() {
        let json = r#"{
            "Id": 3,
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "555-0101",
            "company": "Navy",
            "status": "active",
            "tags": ["compiler"],
            "createdAt": "2024-01-05T09:00:00Z",
            "lastActivity": null
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, 3);
        assert_eq!(contact.notes, "");
        assert!(contact.last_activity.is_none());
    }
}
