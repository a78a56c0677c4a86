pub mod activity;
pub mod contact;
pub mod deal;
pub mod task;

pub use activity::{Activity, ActivityDraft, ActivityPatch, ActivityType};
pub use contact::{Contact, ContactDraft, ContactPatch};
pub use deal::{Deal, DealDraft, DealPatch, DealStage};
pub use task::{Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};
