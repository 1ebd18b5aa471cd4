mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, InMemoryReminderRepo, ReminderRepoError, Repos};
use std::sync::Arc;
pub use system::{ISys, RealSys};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ReminderContext {
    /// Context with empty inmemory repositories and default config,
    /// independent of the environment
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::default(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> ReminderContext {
    ReminderContext {
        config: Config::new(),
        ..ReminderContext::create_inmemory()
    }
}
