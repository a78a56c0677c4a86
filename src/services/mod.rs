use crate::seed::SeedData;
use crate::store::Latency;

pub mod activities;
pub mod contacts;
pub mod deals;
pub mod tasks;

pub use activities::ActivityService;
pub use contacts::ContactService;
pub use deals::DealService;
pub use tasks::TaskService;

/// The four entity services over one seeded dataset. Clones share the same
/// underlying collections.
#[derive(Clone)]
pub struct Services {
    pub contacts: ContactService,
    pub deals: DealService,
    pub tasks: TaskService,
    pub activities: ActivityService,
}

impl Services {
    /// Services with the per-kind simulated latency profiles.
    pub fn new(seed: SeedData) -> Self {
        Self {
            contacts: ContactService::new(seed.contacts),
            deals: DealService::new(seed.deals),
            tasks: TaskService::new(seed.tasks),
            activities: ActivityService::new(seed.activities),
        }
    }

    /// Services with no artificial delay (`--no-delay`, tests).
    pub fn instant(seed: SeedData) -> Self {
        Self {
            contacts: ContactService::with_latency(seed.contacts, Latency::none()),
            deals: DealService::with_latency(seed.deals, Latency::none()),
            tasks: TaskService::with_latency(seed.tasks, Latency::none()),
            activities: ActivityService::with_latency(seed.activities, Latency::none()),
        }
    }
}
