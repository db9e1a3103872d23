use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Attaches the stored bearer token (if any) and sends the request.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match stored_access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        debug!("{} {}", request.method(), request.url());

        let response = match mocked_response(&request) {
            Some(result) => result?,
            None => self
                .client
                .execute(request)
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?,
        };
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            warn!("API rejected the stored credentials; clearing access token");
            clear_access_token();
        }
    }

    pub(crate) async fn map_json_response<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let payload: Value = response
                .json()
                .await
                .map_err(ApiClient::map_error_payload_parse_failure)?;
            Err(serde_json::from_value::<ApiError>(payload.clone()).unwrap_or_else(|_| {
                ApiError::http_status("Request failed", status.as_u16(), server_message(&payload))
            }))
        }
    }

    /// Accepts any 2xx; otherwise reports `"{context}: {status}: {message}"`.
    pub(crate) async fn expect_success(
        &self,
        response: Response,
        context: &str,
    ) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|payload| server_message(&payload));
        Err(ApiError::http_status(context, status.as_u16(), message))
    }

    pub(crate) fn map_error_payload_parse_failure(error: reqwest::Error) -> ApiError {
        ApiError::unknown(format!("Failed to parse error: {}", error))
    }
}

fn server_message(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .or_else(|| payload.get("error"))
        .or_else(|| payload.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(target_arch = "wasm32")]
use crate::utils::storage::{access_token as stored_access_token, clear_access_token};

#[cfg(not(target_arch = "wasm32"))]
fn stored_access_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_access_token() {
    debug!("no browser storage on this target; nothing to clear");
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::mocked_response;
