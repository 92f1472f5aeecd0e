use std::sync::Arc;

use mr_core::device::Device;
use mr_core::ports::{MobileRegistryError, MobileRegistryPort};

pub struct RegisterDevice {
    registry: Arc<dyn MobileRegistryPort>,
}

impl RegisterDevice {
    pub fn new(registry: Arc<dyn MobileRegistryPort>) -> Self {
        Self { registry }
    }

    /// Keeps the typed error: `AlreadyExists` is a business outcome callers
    /// branch on, carrying the record already stored under that IMEI.
    pub fn execute(&self, device: Device) -> Result<Device, MobileRegistryError> {
        let registered = self.registry.save(device)?;
        tracing::info!(imei = registered.imei().as_str(), "device registered");
        Ok(registered)
    }
}
