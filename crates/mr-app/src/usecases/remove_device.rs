use std::sync::Arc;

use mr_core::device::Device;
use mr_core::ports::{MobileRegistryError, MobileRegistryPort};

pub struct RemoveDevice {
    registry: Arc<dyn MobileRegistryPort>,
}

impl RemoveDevice {
    pub fn new(registry: Arc<dyn MobileRegistryPort>) -> Self {
        Self { registry }
    }

    /// Removal matches by IMEI only; the record's `model` is ignored.
    /// `NotFound` stays typed so callers can treat it as a normal outcome.
    pub fn execute(&self, device: &Device) -> Result<(), MobileRegistryError> {
        self.registry.delete(device)?;
        tracing::info!(imei = device.imei().as_str(), "device removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mr_core::device::{DeviceModel, Imei};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRegistry {
        devices: Mutex<HashMap<String, Device>>,
    }

    impl MockRegistry {
        fn seeded(devices: Vec<Device>) -> Self {
            let map = devices
                .into_iter()
                .map(|d| (d.imei().as_str().to_string(), d))
                .collect();
            Self {
                devices: Mutex::new(map),
            }
        }
    }

    impl MobileRegistryPort for MockRegistry {
        fn list_all(&self) -> Result<Vec<Device>, MobileRegistryError> {
            Ok(self.devices.lock().unwrap().values().cloned().collect())
        }

        fn find_by_imei(&self, imei: &Imei) -> Result<Option<Device>, MobileRegistryError> {
            Ok(self.devices.lock().unwrap().get(imei.as_str()).cloned())
        }

        fn save(&self, device: Device) -> Result<Device, MobileRegistryError> {
            self.devices
                .lock()
                .unwrap()
                .insert(device.imei().as_str().to_string(), device.clone());
            Ok(device)
        }

        fn delete(&self, device: &Device) -> Result<(), MobileRegistryError> {
            match self.devices.lock().unwrap().remove(device.imei().as_str()) {
                Some(_) => Ok(()),
                None => Err(MobileRegistryError::NotFound),
            }
        }

        fn exists(&self, device: &Device) -> Result<bool, MobileRegistryError> {
            Ok(self
                .devices
                .lock()
                .unwrap()
                .contains_key(device.imei().as_str()))
        }
    }

    fn device(imei: &str, model: &str) -> Device {
        Device::new(Imei::new(imei), DeviceModel::new(model))
    }

    #[test]
    fn remove_deletes_record_matching_by_imei() {
        let registry = Arc::new(MockRegistry::seeded(vec![device("123", "A")]));
        let uc = RemoveDevice::new(registry.clone());

        uc.execute(&device("123", "B"))
            .expect("remove matches by imei only");

        assert!(registry.devices.lock().unwrap().is_empty());
    }

    #[test]
    fn remove_propagates_not_found() {
        let uc = RemoveDevice::new(Arc::new(MockRegistry::default()));

        let err = uc
            .execute(&device("999", "A"))
            .expect_err("expected NotFound");

        assert!(matches!(err, MobileRegistryError::NotFound));
    }
}
