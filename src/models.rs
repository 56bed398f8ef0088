//! Replies of the clock's JSON endpoints

/// Reply of `GET /status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub hostname: String,
    pub ip: String,
    pub ssid: String,
    /// Signal strength in dBm
    pub rssi: i32,
    /// Milliseconds since boot
    pub uptime: u64,
    /// Bytes
    pub free_heap: u64,
    pub chip_model: String,
    pub sdk_version: String,
    pub current_version: String,
    #[serde(default)]
    pub latest_version: String,
    #[serde(default)]
    pub update_available: bool,
}

impl DeviceStatus {
    pub fn update_check(&self) -> UpdateCheck {
        UpdateCheck {
            current_version: self.current_version.clone(),
            latest_version: self.latest_version.clone(),
            update_available: self.update_available,
            download_url: String::new(),
        }
    }
}

/// Reply of `GET /check-update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCheck {
    pub current_version: String,
    pub latest_version: String,
    pub update_available: bool,
    #[serde(default)]
    pub download_url: String,
}
