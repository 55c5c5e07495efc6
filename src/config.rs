// src/config.rs
// =============================================================================
// Run-wide settings. Built once from the command line, then only read.
// =============================================================================

use std::time::Duration;

/// How deep the crawl goes when --max-depth isn't given.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Per-request timeout when --timeout isn't given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How each discovered link is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<tabs><text> (<depth>) - <url>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Links found at this depth or deeper are never printed or followed
    pub max_depth: usize,
    pub timeout: Duration,
    pub format: OutputFormat,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            format: OutputFormat::Text,
        }
    }
}
