//! Thin wrapper over HTTP GET and form POST requests
//!
//! Nothing is retried: a transport failure or an undecodable JSON body is returned to the
//! caller as is. HTTP error statuses are not failures, the body is handed back like any other.

use serde::de::DeserializeOwned;
use thiserror::Error;

mod confirm;
pub use confirm::{AlwaysConfirm, Confirm, TerminalConfirm};

mod form;
pub use form::{FormData, FormFields, FORM_CONTENT_TYPE};

mod transport;
pub use transport::{HttpTransport, Method, Request, Response, Transport, TransportError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: Request) -> Result<String, ApiError> {
        let method = request.method;
        let url = request.url.clone();

        match self.transport.send(request).await {
            Ok(response) => {
                debug!(method = ?method, url = %url, status = response.status, "request completed");
                Ok(response.body)
            }
            Err(error) => {
                debug!(method = ?method, url = %url, error = %error, "request failed");
                Err(error.into())
            }
        }
    }

    /// GET `url` and return the body text
    pub async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        self.send(Request::get(url)).await
    }

    /// GET `url` and decode the body as JSON
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        self.get_json_as(url).await
    }

    pub async fn get_json_as<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST `data` as a form-urlencoded body and return the response text
    pub async fn post_form(
        &self,
        url: &str,
        data: impl Into<FormData>,
    ) -> Result<String, ApiError> {
        let body = data.into().into_body();
        self.send(Request::post(url, FORM_CONTENT_TYPE, body)).await
    }

    /// Same request as [Client::post_form], decoding the response as JSON
    pub async fn post_form_json(
        &self,
        url: &str,
        data: impl Into<FormData>,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_form_json_as(url, data).await
    }

    pub async fn post_form_json_as<R: DeserializeOwned>(
        &self,
        url: &str,
        data: impl Into<FormData>,
    ) -> Result<R, ApiError> {
        let body = self.post_form(url, data).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Ask `confirm` first, and only POST if the answer was yes.
    ///
    /// Returns `None` without touching the network when declined.
    pub async fn confirm_and_post<C: Confirm + ?Sized>(
        &self,
        confirm: &C,
        message: &str,
        url: &str,
        data: impl Into<FormData>,
    ) -> Result<Option<String>, ApiError> {
        let data = data.into();

        if !confirm.confirm(message) {
            debug!(url = %url, "request declined");
            return Ok(None);
        }

        Ok(Some(self.post_form(url, data).await?))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct FakeTransportData {
        requests: Vec<Request>,
        replies: HashMap<String, String>,
        fail: bool,
    }

    /// Transport answering from a fixed table and recording every request
    #[derive(Default, Clone)]
    pub(crate) struct FakeTransport(Arc<Mutex<FakeTransportData>>);

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            let this = Self::new();
            this.0.lock().unwrap().fail = true;
            this
        }

        pub fn reply(self, url: &str, body: &str) -> Self {
            self.0
                .lock()
                .unwrap()
                .replies
                .insert(url.to_owned(), body.to_owned());
            self
        }

        pub fn requests(&self) -> Vec<Request> {
            self.0.lock().unwrap().requests.clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: Request) -> Result<Response, TransportError> {
            let mut data = self.0.lock().unwrap();

            if data.fail {
                return Err(std::io::Error::from(std::io::ErrorKind::ConnectionRefused).into());
            }

            let body = data.replies.get(&request.url).cloned().unwrap_or_default();
            data.requests.push(request);

            Ok(Response { status: 200, body })
        }
    }

    const URL: &str = "http://clock.local/api";

    #[tokio::test]
    async fn get_text() {
        let transport = FakeTransport::new().reply(URL, "not json");
        let client = Client::with_transport(transport.clone());

        assert_eq!("not json", client.get_text(URL).await.unwrap());
        assert_eq!(vec![Request::get(URL)], transport.requests());
    }

    #[tokio::test]
    async fn get_json() {
        let client = Client::with_transport(FakeTransport::new().reply(URL, r#"{"a":[1,2]}"#));

        let value = client.get_json(URL).await.unwrap();
        assert_eq!(serde_json::json!({ "a": [1, 2] }), value);

        let typed: HashMap<String, Vec<u32>> = client.get_json_as(URL).await.unwrap();
        assert_eq!(vec![1, 2], typed["a"]);
    }

    #[tokio::test]
    async fn get_json_decode_error() {
        let client = Client::with_transport(FakeTransport::new().reply(URL, "<html></html>"));

        assert!(matches!(
            client.get_json(URL).await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn transport_error() {
        let client = Client::with_transport(FakeTransport::failing());

        assert!(matches!(
            client.get_text(URL).await,
            Err(ApiError::Transport(TransportError::Io(_)))
        ));
        assert!(matches!(
            client.post_form(URL, "").await,
            Err(ApiError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn post_form_fields() {
        let transport = FakeTransport::new().reply(URL, "saved");
        let client = Client::with_transport(transport.clone());

        let reply = client
            .post_form(URL, FormFields::new().field("a", 1).field("b", "x y"))
            .await
            .unwrap();

        assert_eq!("saved", reply);
        assert_eq!(
            vec![Request {
                method: Method::Post,
                url: URL.to_owned(),
                content_type: Some("application/x-www-form-urlencoded"),
                body: Some("a=1&b=x%20y".to_owned()),
            }],
            transport.requests()
        );
    }

    #[tokio::test]
    async fn post_form_raw_and_default() {
        let transport = FakeTransport::new();
        let client = Client::with_transport(transport.clone());

        client.post_form(URL, "color=%23ff0000").await.unwrap();
        client.post_form(URL, FormData::default()).await.unwrap();

        let bodies: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|request| request.body.unwrap())
            .collect();
        assert_eq!(vec!["color=%23ff0000".to_owned(), String::new()], bodies);
    }

    #[tokio::test]
    async fn post_form_json() {
        let transport = FakeTransport::new().reply(URL, r#"{"ok":true}"#);
        let client = Client::with_transport(transport.clone());

        let value = client
            .post_form_json(URL, FormFields::new().field("brightness", 80))
            .await
            .unwrap();

        assert_eq!(serde_json::json!({ "ok": true }), value);
        assert_eq!(
            Some("brightness=80".to_owned()),
            transport.requests()[0].body
        );
    }

    #[tokio::test]
    async fn confirm_declined() {
        let transport = FakeTransport::new().reply(URL, "done");
        let client = Client::with_transport(transport.clone());
        let asked = Mutex::new(Vec::new());

        let result = client
            .confirm_and_post(
                &|message: &str| {
                    asked.lock().unwrap().push(message.to_owned());
                    false
                },
                "Really?",
                URL,
                "",
            )
            .await
            .unwrap();

        assert_eq!(None, result);
        assert_eq!(vec!["Really?".to_owned()], *asked.lock().unwrap());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn confirm_accepted() {
        let transport = FakeTransport::new().reply(URL, "done");
        let client = Client::with_transport(transport.clone());

        let result = client
            .confirm_and_post(&AlwaysConfirm, "Really?", URL, FormFields::new().field("x", 1))
            .await
            .unwrap();

        assert_eq!(Some("done".to_owned()), result);
        assert_eq!(1, transport.requests().len());
        assert_eq!(Some("x=1".to_owned()), transport.requests()[0].body);
    }
}
