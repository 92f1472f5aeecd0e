//! # mr-core
//!
//! Core domain models and business logic for MobileRegistry.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod device;
pub mod ports;

// Re-export commonly used types at the crate root
pub use device::{Device, DeviceModel, Imei};
pub use ports::{MobileRegistryError, MobileRegistryPort};
