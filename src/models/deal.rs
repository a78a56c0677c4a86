use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Entity, EntityId};

/// Pipeline stage for a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    #[default]
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    Closed,
}

impl DealStage {
    /// Pipeline order, left to right.
    pub const ALL: [DealStage; 5] = [
        Self::Lead,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lead" => Some(Self::Lead),
            "qualified" => Some(Self::Qualified),
            "proposal" => Some(Self::Proposal),
            "negotiation" => Some(Self::Negotiation),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub title: String,
    /// Non-negative by caller contract; the service does not coerce.
    pub value: f64,
    pub stage: DealStage,
    /// Not validated against the contact collection.
    pub contact_id: EntityId,
    /// Percent, 0-100.
    pub probability: u8,
    pub expected_close: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DealDraft {
    pub title: String,
    pub value: f64,
    pub stage: DealStage,
    pub contact_id: EntityId,
    pub probability: u8,
    pub expected_close: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct DealPatch {
    pub title: Option<String>,
    pub value: Option<f64>,
    pub stage: Option<DealStage>,
    pub contact_id: Option<EntityId>,
    pub probability: Option<u8>,
    pub expected_close: Option<DateTime<Utc>>,
}

impl Entity for Deal {
    const NAME: &'static str = "Deal";
    type Patch = DealPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply(&mut self, patch: DealPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if let Some(contact_id) = patch.contact_id {
            self.contact_id = contact_id;
        }
        if let Some(probability) = patch.probability {
            self.probability = probability;
        }
        if let Some(expected_close) = patch.expected_close {
            self.expected_close = expected_close;
        }
    }
}
