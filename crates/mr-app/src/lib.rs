//! MobileRegistry Application Orchestration Layer
//!
//! This crate contains business logic use cases over the registry port.

pub mod usecases;

pub use usecases::{FindDevice, ListDevices, RegisterDevice, RemoveDevice};
