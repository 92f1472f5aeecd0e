use thiserror::Error;

use crate::device::Device;

#[derive(Debug, Error)]
pub enum MobileRegistryError {
    /// Carries the record already stored under the rejected IMEI.
    #[error("device already exists: {}", .0.imei().as_str())]
    AlreadyExists(Device),

    #[error("device not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}
