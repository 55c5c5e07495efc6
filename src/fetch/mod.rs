// src/fetch/mod.rs
// =============================================================================
// This module gets page bodies for the crawler.
//
// Submodules:
// - error: the FetchError type (transport failure vs bad status)
// - http: the real implementation on top of reqwest
//
// The crawler only talks to the Fetcher trait, which is how the tests swap
// the network out for in-memory pages.
// =============================================================================

mod error;
mod http;

use std::io::Read;

pub use error::FetchError;
pub use http::HttpFetcher;

/// Something that can turn a URL into a readable page body.
pub trait Fetcher {
    /// The open body stream; the caller reads it to the end and drops it.
    type Body: Read;

    fn fetch(&self, url: &str) -> Result<Self::Body, FetchError>;
}
