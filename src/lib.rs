pub mod cli;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

pub use services::Services;
pub use store::{EntityId, EntityStore, Latency, StoreError};
