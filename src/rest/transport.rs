/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use futures::future::BoxFuture;
use std::time::Duration;
use url::Url;

// The original interface has no timeout at all. This is a safety floor
// rather than tuned behavior.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs the raw HTTP exchange for a [`Session`](crate::rest::Session).
///
/// The API is one blocking GET per call, so the seam is one method wide.
/// Tests substitute their own implementation to avoid the network.
pub trait Transport: Send + Sync {
    /// Fetches the response body returned by the service for the request URL
    fn fetch(&self, url: Url) -> BoxFuture<'_, Result<String, FlickrError>>;
}

/// [`Transport`] backed by a reqwest client
#[derive(Default, Clone)]
pub struct HttpTransport {
    https_client: reqwest::Client,
}

impl Transport for HttpTransport {
    fn fetch(&self, url: Url) -> BoxFuture<'_, Result<String, FlickrError>> {
        Box::pin(async move {
            let resp = self
                .https_client
                .get(url)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await?;
            Ok(resp.text().await?)
        })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}
