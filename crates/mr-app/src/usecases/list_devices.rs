use anyhow::Result;
use std::sync::Arc;

use mr_core::device::Device;
use mr_core::ports::MobileRegistryPort;

pub struct ListDevices {
    registry: Arc<dyn MobileRegistryPort>,
}

impl ListDevices {
    pub fn new(registry: Arc<dyn MobileRegistryPort>) -> Self {
        Self { registry }
    }

    pub fn execute(&self) -> Result<Vec<Device>> {
        let devices = self
            .registry
            .list_all()
            .map_err(|e| anyhow::anyhow!("Failed to list devices: {}", e))?;
        tracing::debug!(count = devices.len(), "listed registered devices");
        Ok(devices)
    }
}
