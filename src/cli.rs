// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   linkwalk <URL> [--max-depth N] [--timeout SECS] [--json] [--log-level LEVEL]
//
// If the URL is missing (or isn't a valid absolute URL) clap prints the
// usage to stderr and exits with code 2 before anything is fetched.
// =============================================================================

use crate::config::{CrawlConfig, OutputFormat, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS};
use clap::{Parser, ValueEnum};
use std::time::Duration;
use url::Url;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "linkwalk",
    version = "0.1.0",
    about = "Print the links on a web page, then follow each one, depth-first",
    long_about = "linkwalk downloads a page, prints every link it finds, and repeats the \
                  process for each link until the maximum depth is reached. \
                  Links are printed exactly as written in the page (they are not resolved)."
)]
pub struct Cli {
    /// The page to start from (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed)
    #[arg(value_name = "URL", value_parser = parse_seed_url)]
    pub seed_url: Url,

    /// Maximum crawl depth (default: 3)
    ///
    /// The starting page is depth 0. Links found at this depth or deeper
    /// are not printed and not followed.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Request timeout in seconds (default: 30)
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Output one JSON object per link instead of indented text
    #[arg(long)]
    pub json: bool,

    /// How chatty the diagnostics on stderr are
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

// Levels accepted by --log-level
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl Cli {
    /// Collects the crawl settings out of the parsed arguments.
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_depth: self.max_depth,
            timeout: Duration::from_secs(self.timeout),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

// Parses and validates the starting URL
fn parse_seed_url(value: &str) -> Result<Url, String> {
    Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["linkwalk", "https://example.com"]).unwrap();
        assert_eq!(cli.seed_url.as_str(), "https://example.com/");
        assert_eq!(cli.log_level, LogLevel::Info);

        let config = cli.crawl_config();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "linkwalk",
            "http://localhost:8080/index.html",
            "--max-depth",
            "5",
            "--timeout",
            "4",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);

        let config = cli.crawl_config();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let error = Cli::try_parse_from(["linkwalk"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_relative_seed_is_rejected() {
        assert!(Cli::try_parse_from(["linkwalk", "/just/a/path"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
    }
}
