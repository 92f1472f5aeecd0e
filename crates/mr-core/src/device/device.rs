use serde::{Deserialize, Serialize};

use super::value_objects::{DeviceModel, Imei};

/// A mobile-device record.
///
/// Registry identity is the IMEI alone; `model` is descriptive and carries no
/// identity. Equality here is structural — the registry enforces identity by
/// keying on the IMEI, not by overriding equality on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Unique hardware identifier
    pub imei: Imei,
    pub model: DeviceModel,
}

impl Device {
    pub fn new(imei: Imei, model: DeviceModel) -> Self {
        Self { imei, model }
    }

    pub fn imei(&self) -> &Imei {
        &self.imei
    }

    pub fn model(&self) -> &DeviceModel {
        &self.model
    }
}
