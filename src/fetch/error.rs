// src/fetch/error.rs
// =============================================================================
// The ways a fetch can fail.
//
// - Transport: no response at all (DNS, connection, TLS, timeout, bad URL)
// - Status: we got a response but the status code was above 299
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Passed through untouched from reqwest
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Error ({code}): {url}")]
    Status { code: u16, url: String },
}
