use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use mr_core::device::{Device, Imei};
use mr_core::ports::{MobileRegistryError, MobileRegistryPort};

/// In-memory mobile registry implementation.
///
/// 内存版的移动设备注册表实现。
///
/// Backing map is keyed on the IMEI string, so uniqueness holds without any
/// custom equality on [`Device`]. The lock is the single guard for all
/// mutating operations when the registry is shared behind `Arc`.
pub struct InMemoryMobileRegistry {
    devices: RwLock<HashMap<String, Device>>,
}

impl InMemoryMobileRegistry {
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-seeded registry. Insert-if-absent applies in seed order, so the
    /// first record wins per duplicate IMEI.
    pub fn with_devices(devices: impl IntoIterator<Item = Device>) -> Self {
        let mut map = HashMap::new();
        for device in devices {
            map.entry(device.imei().as_str().to_string())
                .or_insert(device);
        }
        Self {
            devices: RwLock::new(map),
        }
    }
}

impl MobileRegistryPort for InMemoryMobileRegistry {
    fn list_all(&self) -> Result<Vec<Device>, MobileRegistryError> {
        let devices = self
            .devices
            .read()
            .map_err(|e| MobileRegistryError::Storage(e.to_string()))?;

        Ok(devices.values().cloned().collect())
    }

    fn find_by_imei(&self, imei: &Imei) -> Result<Option<Device>, MobileRegistryError> {
        let devices = self
            .devices
            .read()
            .map_err(|e| MobileRegistryError::Storage(e.to_string()))?;

        Ok(devices.get(imei.as_str()).cloned())
    }

    fn save(&self, device: Device) -> Result<Device, MobileRegistryError> {
        let mut devices = self
            .devices
            .write()
            .map_err(|e| MobileRegistryError::Storage(e.to_string()))?;

        match devices.entry(device.imei().as_str().to_string()) {
            Entry::Occupied(existing) => {
                Err(MobileRegistryError::AlreadyExists(existing.get().clone()))
            }
            Entry::Vacant(slot) => {
                let stored = slot.insert(device).clone();
                tracing::debug!(imei = stored.imei().as_str(), "device saved");
                Ok(stored)
            }
        }
    }

    fn delete(&self, device: &Device) -> Result<(), MobileRegistryError> {
        let mut devices = self
            .devices
            .write()
            .map_err(|e| MobileRegistryError::Storage(e.to_string()))?;

        match devices.remove(device.imei().as_str()) {
            Some(removed) => {
                tracing::debug!(imei = removed.imei().as_str(), "device deleted");
                Ok(())
            }
            None => Err(MobileRegistryError::NotFound),
        }
    }

    fn exists(&self, device: &Device) -> Result<bool, MobileRegistryError> {
        let devices = self
            .devices
            .read()
            .map_err(|e| MobileRegistryError::Storage(e.to_string()))?;

        Ok(devices.contains_key(device.imei().as_str()))
    }
}
