/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::transport::{HttpTransport, Transport};
use crate::rest::REST_ENDPOINT;
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// This can be filter values as well as other parameters the specific API method expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

// Parameters injected on every call. Caller-supplied values under these
// keys are discarded.
const INJECTED_PARAMS: [&str; 4] = ["api_key", "method", "format", "nojsoncallback"];

// Response format selector sent with every call
const RESPONSE_FORMAT: &str = "json";

/// Credentials issued by Flickr.
///
/// The secret key is only needed for private data calls and may be omitted
/// when only public data is requested.
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    secret_key: Option<String>,
}

impl Creds {
    /// Creates credentials from the provided API key and optional secret key
    pub fn from_key(api_key: &str, secret_key: Option<&str>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.map(Into::into),
        }
    }

    /// Returns the secret key, if one was supplied
    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("secret_key", &"xxx")
            .finish()
    }
}

/// Error details reported by the service for the most recent failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub code: u32,
    pub message: String,
}

/// A communication session with Flickr.
///
/// Owns the API credentials and performs the single request primitive that
/// every other type goes through. Cheap to clone; clones share the same
/// last-error state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    creds: Creds,
    transport: Arc<dyn Transport>,
    last_error: Mutex<Option<RemoteError>>,
}

impl Session {
    /// Creates a new session using the provided credentials
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(creds, Arc::new(HttpTransport::default()))
    }

    /// Creates a session that exchanges requests through the given transport
    pub fn with_transport(creds: Creds, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                creds,
                transport,
                last_error: Mutex::new(None),
            }),
        }
    }

    /// Calls a remote API method on Flickr.
    ///
    /// `params` holds any method specific parameters. The `api_key`, `method`,
    /// `format` and `nojsoncallback` parameters are injected here and win over
    /// caller supplied values under those keys. On a `stat != "ok"` response
    /// the reported code and message are recorded on this session and returned
    /// as [`FlickrError::ApiResponse`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> Result<T, FlickrError> {
        let injected = [
            ("api_key", self.inner.creds.api_key.as_str()),
            ("method", method),
            ("format", RESPONSE_FORMAT),
            ("nojsoncallback", "1"),
        ];
        let merged = params
            .iter()
            .filter(|p| !INJECTED_PARAMS.contains(&p.0))
            .chain(injected.iter());
        let req_url = url::Url::parse_with_params(REST_ENDPOINT, merged)?;

        log::debug!("GET {req_url}");
        let body = self.inner.transport.fetch(req_url).await?;
        let resp: serde_json::Value = serde_json::from_str(&body)?;

        if resp.get("stat").and_then(serde_json::Value::as_str) == Some("ok") {
            return Ok(serde_json::from_value(resp)?);
        }

        // Extract the error details
        let code = resp
            .get("code")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or_default() as u32;
        let message = resp
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();
        log::debug!("{method} failed: {code} {message}");
        *self.last_error_lock() = Some(RemoteError {
            code,
            message: message.clone(),
        });
        Err(FlickrError::ApiResponse(code, message))
    }

    /// Returns the error reported by the service for the most recent failed
    /// call, if any. Transport and parse failures do not update this.
    pub fn last_error(&self) -> Option<RemoteError> {
        self.last_error_lock().clone()
    }

    fn last_error_lock(&self) -> MutexGuard<'_, Option<RemoteError>> {
        self.inner
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("creds", &self.inner.creds)
            .finish()
    }
}
