use anyhow::Result;
use std::sync::Arc;

use mr_core::device::{Device, Imei};
use mr_core::ports::MobileRegistryPort;

pub struct FindDevice {
    registry: Arc<dyn MobileRegistryPort>,
}

impl FindDevice {
    pub fn new(registry: Arc<dyn MobileRegistryPort>) -> Self {
        Self { registry }
    }

    /// `Ok(None)` means no record under that IMEI; absence is not an error.
    pub fn execute(&self, imei: &Imei) -> Result<Option<Device>> {
        self.registry
            .find_by_imei(imei)
            .map_err(|e| anyhow::anyhow!("Failed to find device: {}", e))
    }
}
