//! HTTP transport
//!
//! Thin wrapper over `reqwest` used by every API call. The bearer token is
//! read from the session store at request time, so a login/logout in one
//! place is immediately visible to every in-flight caller.

use crate::error::{ClientError, ClientResult};
use crate::store::session::SessionStore;
use crate::ClientConfig;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::response::{ErrorResponse, ValidationErrorResponse};
use std::sync::Arc;

/// HTTP client for making network requests to the ordering backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {}", t))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body, discarding the response body
    pub async fn post_unit(&self, path: &str) -> ClientResult<()> {
        let request = self.authorized(self.client.post(self.url(path)));
        let response = request.send().await?;
        Self::handle_unit(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    pub async fn post_unit_with<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_unit(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete_unit(&self, path: &str) -> ClientResult<()> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_unit(response).await
    }

    /// Handle the HTTP response: status check, then explicit body decode
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Handle a response whose body carries nothing the client needs
    async fn handle_unit(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, text));
        }

        Ok(())
    }

    /// Map a non-2xx status to an error, extracting the backend's message
    /// field when the body carries one
    fn status_error(status: StatusCode, body: String) -> ClientError {
        if status == StatusCode::UNAUTHORIZED {
            return ClientError::Unauthorized;
        }

        let message = if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body) {
            err.message
        } else if let Ok(err) = serde_json::from_str::<ValidationErrorResponse>(&body) {
            let mut parts: Vec<String> = err
                .errors
                .into_iter()
                .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
                .collect();
            parts.sort();
            parts.join("; ")
        } else {
            body
        };

        ClientError::Server {
            status: status.as_u16(),
            message,
        }
    }
}
