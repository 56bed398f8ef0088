//! Typed access to the clock's HTTP endpoints

use crate::{
    api::{ApiError, Client, Confirm, FormData, HttpTransport, Transport},
    models::{DeviceStatus, UpdateCheck},
};

pub const UPDATE_CONFIRMATION: &str =
    "Are you sure you want to update the firmware? The device will restart.";
pub const WIFI_RESET_CONFIRMATION: &str =
    "Are you sure you want to reset WiFi settings? The device will restart and enter configuration mode.";

#[derive(Debug, Clone)]
pub struct Device<T = HttpTransport> {
    base_url: String,
    client: Client<T>,
}

impl Device<HttpTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }
}

impl<T: Transport> Device<T> {
    pub fn with_client(base_url: &str, client: Client<T>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    /// Absolute URL of `path` on this device
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<DeviceStatus, ApiError> {
        self.client.get_json_as(&self.url("/status")).await
    }

    #[instrument(skip(self))]
    pub async fn check_update(&self) -> Result<UpdateCheck, ApiError> {
        self.client.get_json_as(&self.url("/check-update")).await
    }

    /// Start a firmware update, once `confirm` agrees
    #[instrument(skip(self, confirm))]
    pub async fn install_update<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
    ) -> Result<Option<String>, ApiError> {
        self.client
            .confirm_and_post(
                confirm,
                UPDATE_CONFIRMATION,
                &self.url("/update"),
                FormData::default(),
            )
            .await
    }

    /// Clear the WiFi credentials, once `confirm` agrees
    #[instrument(skip(self, confirm))]
    pub async fn reset_wifi<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
    ) -> Result<Option<String>, ApiError> {
        self.client
            .confirm_and_post(
                confirm,
                WIFI_RESET_CONFIRMATION,
                &self.url("/wifi-reset"),
                FormData::default(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{tests::FakeTransport, Method};
    use crate::models::tests::{CHECK_UPDATE_JSON, STATUS_JSON};

    const BASE: &str = "http://qlockthree.local";

    fn device(transport: &FakeTransport) -> Device<FakeTransport> {
        Device::with_client(BASE, Client::with_transport(transport.clone()))
    }

    #[test]
    fn url_joins_with_single_slash() {
        let transport = FakeTransport::new();

        assert_eq!("http://qlockthree.local/status", device(&transport).url("/status"));
        assert_eq!("http://qlockthree.local/status", device(&transport).url("status"));

        let trailing = Device::with_client("http://10.0.0.2/", Client::with_transport(transport));
        assert_eq!("http://10.0.0.2/update", trailing.url("/update"));
    }

    #[tokio::test]
    async fn status() {
        let transport = FakeTransport::new().reply("http://qlockthree.local/status", STATUS_JSON);

        let status = device(&transport).status().await.unwrap();

        assert_eq!("192.168.1.42", status.ip);
        assert_eq!(Method::Get, transport.requests()[0].method);
    }

    #[tokio::test]
    async fn check_update() {
        let transport = FakeTransport::new()
            .reply("http://qlockthree.local/check-update", CHECK_UPDATE_JSON);

        let check = device(&transport).check_update().await.unwrap();

        assert_eq!("1.2.0", check.latest_version);
    }

    #[tokio::test]
    async fn install_update_confirmed() {
        let transport = FakeTransport::new()
            .reply("http://qlockthree.local/update", "Starting update...");

        let reply = device(&transport)
            .install_update(&|message: &str| message == UPDATE_CONFIRMATION)
            .await
            .unwrap();

        assert_eq!(Some("Starting update...".to_owned()), reply);

        let requests = transport.requests();
        assert_eq!(1, requests.len());
        assert_eq!(Method::Post, requests[0].method);
        assert_eq!(Some(String::new()), requests[0].body);
    }

    #[tokio::test]
    async fn reset_wifi_declined() {
        let transport = FakeTransport::new();

        let reply = device(&transport)
            .reset_wifi(&|message: &str| message != WIFI_RESET_CONFIRMATION)
            .await
            .unwrap();

        assert_eq!(None, reply);
        assert!(transport.requests().is_empty());
    }
}
