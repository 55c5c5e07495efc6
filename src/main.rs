// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (missing URL = exit code 2)
// 2. Set up logging to stderr
// 3. Build the HTTP fetcher and crawl from the seed URL
// 4. Exit with proper code (0 = crawl finished, 2 = error)
//
// Failed downloads during the crawl are NOT errors for the whole run: they
// are logged and only stop that one branch.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - run-wide settings
mod crawl;    // src/crawl/ - depth-first traversal and output
mod extract;  // src/extract/ - HTML tokens -> anchors
mod fetch;    // src/fetch/ - HTTP downloads
mod link;     // src/link.rs - the Link record and its validity rules
mod logging;  // src/logging.rs - tracing setup

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::LinkPrinter;
use fetch::HttpFetcher;
use std::io;

fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished (individual pages may have failed, see the log)
//   Err = unexpected error (client setup, broken stdout)
fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version and a missing URL
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into());
    tracing::debug!("{:?}", cli);

    let config = cli.crawl_config();
    let fetcher = HttpFetcher::new(config.timeout).context("failed to build HTTP client")?;

    // Lock stdout once; every link line goes through this printer
    let stdout = io::stdout();
    let mut printer = LinkPrinter::new(stdout.lock(), config.format);

    crawl::crawl(&fetcher, cli.seed_url.as_str(), &config, &mut printer)
        .context("failed to write output")?;

    Ok(0)
}
