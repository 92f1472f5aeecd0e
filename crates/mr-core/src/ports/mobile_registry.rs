use crate::{
    device::{Device, Imei},
    ports::errors::MobileRegistryError,
};

/// Registry of mobile-device records, unique by IMEI.
///
/// 移动设备注册表端口:按 IMEI 唯一存储设备记录。
///
/// All operations are synchronous, run-to-completion, in-memory computations;
/// implementations shared across threads guard their own state.
pub trait MobileRegistryPort: Send + Sync {
    /// 查询所有已注册设备(快照)
    fn list_all(&self) -> Result<Vec<Device>, MobileRegistryError>;

    /// 根据 IMEI 查询设备
    fn find_by_imei(&self, imei: &Imei) -> Result<Option<Device>, MobileRegistryError>;

    /// Insert-if-absent. Returns the stored record on success; fails with
    /// [`MobileRegistryError::AlreadyExists`] carrying the record already
    /// registered under that IMEI, leaving the registry unchanged.
    fn save(&self, device: Device) -> Result<Device, MobileRegistryError>;

    /// Remove the record with the argument's IMEI.
    ///
    /// Matching is by IMEI only: a request with a correct IMEI but an
    /// arbitrary `model` still succeeds. Fails with
    /// [`MobileRegistryError::NotFound`] when no such record exists.
    fn delete(&self, device: &Device) -> Result<(), MobileRegistryError>;

    /// 判断设备是否已注册(按 IMEI)
    fn exists(&self, device: &Device) -> Result<bool, MobileRegistryError>;
}

#[cfg(test)]
mockall::mock! {
    pub Registry {}

    impl MobileRegistryPort for Registry {
        fn list_all(&self) -> Result<Vec<Device>, MobileRegistryError>;
        fn find_by_imei(&self, imei: &Imei) -> Result<Option<Device>, MobileRegistryError>;
        fn save(&self, device: Device) -> Result<Device, MobileRegistryError>;
        fn delete(&self, device: &Device) -> Result<(), MobileRegistryError>;
        fn exists(&self, device: &Device) -> Result<bool, MobileRegistryError>;
    }
}
