// Service exports
pub mod seed;
pub mod store;

pub use seed::{seed_demo, DEMO_INVESTOR_PROFILE, DEMO_STARTUP_PROFILE};
pub use store::{MemoryStore, StoreError};
