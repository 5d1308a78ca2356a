//! Cityscope REST API plumbing: the response envelope, request shapes and the
//! transport seam used by every endpoint helper.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Uniform response wrapper returned by every endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, treating `success: false` or a missing payload as a rejection
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.failure_message()));
        }

        self.data
            .ok_or_else(|| ApiError::Rejected("Response contained no data".to_string()))
    }

    fn failure_message(&self) -> String {
        match (&self.error, self.message.is_empty()) {
            (Some(error), _) if !error.is_empty() => error.clone(),
            (_, false) => self.message.clone(),
            _ => "Request failed".to_string(),
        }
    }
}

/// Error type for API operations
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Non-2xx status without a readable envelope
    Http { status: u16 },
    /// Body was not the expected JSON
    Parse(String),
    /// Server answered with `success: false`
    Rejected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http { status } => write!(f, "Request failed with status {}", status),
            ApiError::Parse(e) => write!(f, "Invalid response: {}", e),
            ApiError::Rejected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// One part of a multipart upload
#[derive(Clone, Debug, PartialEq)]
pub enum MultipartField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        mime_type: String,
        data: Vec<u8>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<MultipartField>),
}

/// A fully resolved request handed to the transport
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: RequestBody,
    pub bearer: Option<String>,
}

/// Status and body text as received
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves requests over the wire.
///
/// Implementations only report transport failures; status handling and
/// envelope decoding happen in [`ApiClient`].
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Entry point for all endpoint helpers (see `services::posts`, `services::profile`)
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Same client, sending `Authorization: Bearer <token>` when set
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and unwrap the envelope's payload
    pub async fn send<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            body,
            bearer: self.token.clone(),
        };

        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        decode_response(response)
    }
}

/// Turn a raw response into the envelope payload
pub fn decode_response<R: DeserializeOwned>(response: RawResponse) -> Result<R, ApiError> {
    let envelope = serde_json::from_str::<ApiEnvelope<R>>(&response.body);

    if !response.is_success() {
        return match envelope {
            Ok(envelope) => Err(ApiError::Rejected(envelope.failure_message())),
            Err(_) => Err(ApiError::Http {
                status: response.status,
            }),
        };
    }

    envelope
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .into_result()
}

/// Transport for the current target: fetch in the browser, reqwest natively
pub fn default_transport() -> Rc<dyn HttpTransport> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(browser::FetchTransport)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(native::ReqwestTransport::default())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use gloo_net::http::{Request, RequestBuilder};
    use web_sys::FormData;

    /// Fetch API transport (gloo-net), multipart bodies go through `FormData`
    pub struct FetchTransport;

    fn form_data(fields: &[MultipartField]) -> Result<FormData, ApiError> {
        let form = FormData::new()
            .map_err(|e| ApiError::Network(format!("Failed to create FormData: {:?}", e)))?;

        for field in fields {
            match field {
                MultipartField::Text { name, value } => form
                    .append_with_str(name, value)
                    .map_err(|e| ApiError::Network(format!("Failed to append {}: {:?}", name, e)))?,
                MultipartField::File {
                    name,
                    filename,
                    mime_type,
                    data,
                } => {
                    let blob = crate::utils::browser::bytes_to_blob(data, mime_type)
                        .map_err(ApiError::Network)?;
                    form.append_with_blob_and_filename(name, &blob, filename)
                        .map_err(|e| ApiError::Network(format!("Failed to append file: {:?}", e)))?
                }
            }
        }

        Ok(form)
    }

    #[async_trait(?Send)]
    impl HttpTransport for FetchTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let mut builder: RequestBuilder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
            };

            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }

            let response = match request.body {
                RequestBody::Empty => builder.send().await,
                RequestBody::Json(value) => builder
                    .json(&value)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                RequestBody::Multipart(fields) => builder
                    .body(form_data(&fields)?)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use reqwest::multipart::{Form, Part};

    /// reqwest transport for native builds
    #[derive(Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    fn form(fields: Vec<MultipartField>) -> Result<Form, ApiError> {
        let mut form = Form::new();

        for field in fields {
            form = match field {
                MultipartField::Text { name, value } => form.text(name, value),
                MultipartField::File {
                    name,
                    filename,
                    mime_type,
                    data,
                } => {
                    let part = Part::bytes(data)
                        .file_name(filename)
                        .mime_str(&mime_type)
                        .map_err(|e| ApiError::Network(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }

        Ok(form)
    }

    #[async_trait(?Send)]
    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
            };

            let mut builder = self.client.request(method, &request.url);

            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token);
            }

            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(fields) => builder.multipart(form(fields)?),
            };

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

            Ok(RawResponse { status, body })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        pong: bool,
    }

    #[test]
    fn test_envelope_success() {
        let envelope: ApiEnvelope<Ping> =
            serde_json::from_value(json!({ "success": true, "message": "ok", "data": { "pong": true } }))
                .unwrap();
        assert_eq!(envelope.into_result(), Ok(Ping { pong: true }));
    }

    #[test]
    fn test_envelope_failure_prefers_error_field() {
        let envelope: ApiEnvelope<Ping> = serde_json::from_value(
            json!({ "success": false, "message": "Validation failed", "error": "Content too long" }),
        )
        .unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::Rejected("Content too long".to_string()))
        );

        let envelope: ApiEnvelope<Ping> =
            serde_json::from_value(json!({ "success": false, "message": "Not found" })).unwrap();
        assert_eq!(envelope.into_result(), Err(ApiError::Rejected("Not found".to_string())));
    }

    #[test]
    fn test_success_without_data_is_rejected() {
        let envelope: ApiEnvelope<Ping> =
            serde_json::from_value(json!({ "success": true, "message": "ok" })).unwrap();
        assert!(matches!(envelope.into_result(), Err(ApiError::Rejected(_))));
    }

    #[test]
    fn test_decode_non_2xx() {
        let with_envelope = RawResponse {
            status: 401,
            body: json!({ "success": false, "message": "Unauthorized" }).to_string(),
        };
        assert_eq!(
            decode_response::<Ping>(with_envelope),
            Err(ApiError::Rejected("Unauthorized".to_string()))
        );

        let html = RawResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(decode_response::<Ping>(html), Err(ApiError::Http { status: 502 }));
    }

    #[test]
    fn test_decode_garbage_2xx() {
        let response = RawResponse {
            status: 200,
            body: "not json".to_string(),
        };
        assert!(matches!(decode_response::<Ping>(response), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_client_builds_url_and_bearer() {
        let transport = MockTransport::new();
        transport.respond(200, json!({ "success": true, "message": "", "data": { "pong": true } }));

        let api = ApiClient::new(transport.clone(), "http://api.test/")
            .with_token(Some("tok".to_string()));
        let result: Result<Ping, _> = block_on(api.send(HttpMethod::Get, "/api/ping", RequestBody::Empty));

        assert_eq!(result, Ok(Ping { pong: true }));
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/api/ping");
        assert_eq!(request.bearer.as_deref(), Some("tok"));
    }

    #[test]
    fn test_network_error_passes_through() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("offline".to_string()));

        let result: Result<Ping, _> =
            block_on(client(&transport).send(HttpMethod::Get, "/api/ping", RequestBody::Empty));
        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
    }
}
