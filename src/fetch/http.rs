// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP(S).
//
// Key functionality:
// - Makes one plain GET request per URL (no custom headers, no cookies)
// - Treats any status code above 299 as a failure
// - Hands back the response itself, which implements std::io::Read, so the
//   body is streamed into the tokenizer instead of being loaded up front
//
// We use reqwest's *blocking* client: the crawl is strictly one request at
// a time, so there is nothing for an async runtime to do.
// =============================================================================

use super::{FetchError, Fetcher};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Fetcher backed by a single reused reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the HTTP client.
    ///
    /// Redirects are followed with reqwest's default policy.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    type Body = Response;

    fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        debug!("Downloading {}", url);

        // Relative hrefs and other junk fail here as a transport error
        let response = self.client.get(url).send().map_err(|e| {
            debug!("Error: {}", e);
            FetchError::from(e)
        })?;

        // The body is never read on failure; dropping the response releases it
        check_status(response.status(), url)?;
        Ok(response)
    }
}

/// Fails with `Error (<code>): <url>` for any status code above 299.
pub fn check_status(status: StatusCode, url: &str) -> Result<(), FetchError> {
    if status.as_u16() > 299 {
        let error = FetchError::Status {
            code: status.as_u16(),
            url: url.to_string(),
        };
        debug!("{}", error);
        return Err(error);
    }
    Ok(())
}
