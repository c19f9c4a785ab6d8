/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr::rest::{Creds, FlickrError, Session, Transport};
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use url::Url;

/// Transport that replays canned response bodies and records every request
/// URL. Once the canned responses run out, further calls fail like a
/// network error.
pub struct MockTransport {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<Url>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests issued through this transport so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Query parameters of the nth request as (key, value) pairs
    pub fn query_params(&self, nth: usize) -> Vec<(String, String)> {
        self.requests.lock().unwrap()[nth]
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

impl Transport for MockTransport {
    fn fetch(&self, url: Url) -> BoxFuture<'_, Result<String, FlickrError>> {
        self.requests.lock().unwrap().push(url);
        let next = self.responses.lock().unwrap().pop_front();
        Box::pin(async move {
            next.ok_or_else(|| {
                FlickrError::Io(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "no canned response left",
                ))
            })
        })
    }
}

/// Builds a session wired to a [`MockTransport`] replaying `responses`
#[allow(dead_code)]
pub fn mock_session<I, S>(responses: I) -> (Session, Arc<MockTransport>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let transport = Arc::new(MockTransport::new(responses));
    let session = Session::with_transport(Creds::from_key("test-api-key", None), transport.clone());
    (session, transport)
}
