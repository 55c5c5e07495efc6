// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl: fetch a page, print its links, follow them.
//
// Features:
// - Depth-first traversal, in the order links appear on each page
// - Configurable depth limit (the seed page is depth 0)
// - Text or JSON output
// =============================================================================

mod printer;
mod stack;

pub use printer::LinkPrinter;
pub use stack::crawl;
