//! In-memory adapters.

pub mod mobile_registry;

pub use mobile_registry::InMemoryMobileRegistry;
