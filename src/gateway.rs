// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated request gateway.
//!
//! Every API call goes through [`Gateway`], which:
//! - Resolves resource paths against the configured base URL
//! - Attaches the session token as a bearer credential when one is stored
//! - Encodes the payload per its [`Payload`] tag (JSON or form)
//! - Maps non-2xx responses and transport failures to [`ClientError`]
//!
//! There is no retry, backoff, or timeout policy here.

use crate::error::{ClientError, Result};
use crate::session::Session;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Request body, tagged with its wire encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    /// `application/json`
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
}

impl Payload {
    /// JSON payload from any serializable value.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Payload::Json)
            .map_err(|e| ClientError::Encode(e.to_string()))
    }

    /// Form payload from field/value pairs.
    pub fn form<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Payload::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// A verb, a resource path, and a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub payload: Payload,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, payload: Payload) -> Self {
        Self {
            method,
            path: path.into(),
            payload,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, Payload::None)
    }

    pub fn post(path: impl Into<String>, payload: Payload) -> Self {
        Self::new(Method::POST, path, payload)
    }

    pub fn put(path: impl Into<String>, payload: Payload) -> Self {
        Self::new(Method::PUT, path, payload)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, Payload::None)
    }
}

/// Single HTTP dispatch point for the API.
#[derive(Clone, Debug)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl Gateway {
    /// Create a gateway for `base_url` reading tokens from `session`.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, session)
    }

    /// Create a gateway with a preconfigured HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path. Trailing slashes on the path are kept.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and parse the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.dispatch(request).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(format!("JSON parse error: {}", e)))
    }

    /// Send a request whose response body is ignored (deletes, 204s).
    pub async fn send_no_content(&self, request: ApiRequest) -> Result<()> {
        self.dispatch(request).await?;
        Ok(())
    }

    /// Build, authenticate, and send the request; reject non-2xx statuses.
    async fn dispatch(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let url = self.url(&request.path);
        let mut builder = self.http.request(request.method.clone(), &url);

        // Attach whatever token is stored; the session is read on every call.
        let authenticated = match self.session.token()? {
            Some(token) => {
                builder = builder.bearer_auth(token);
                true
            }
            None => false,
        };

        builder = match &request.payload {
            Payload::None => builder,
            Payload::Json(value) => builder.json(value),
            Payload::Form(fields) => builder.form(fields),
        };

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            authenticated,
            "Dispatching API request"
        );

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, error = %e, "API request failed");
            ClientError::Network(e.to_string())
        })?;

        check_response(&request, response).await
    }
}

/// Check response status and return error if not successful.
async fn check_response(
    request: &ApiRequest,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(
        method = %request.method,
        path = %request.path,
        status = status.as_u16(),
        "API returned error status"
    );

    Err(ClientError::Http { status, body })
}
