// src/extract/mod.rs
// =============================================================================
// This module pulls anchors (<a href="...">text</a>) out of HTML.
//
// Submodules:
// - token: wraps the html5gum tokenizer into a flat stream of PageTokens
// - anchor: the two-state machine that turns tokens into Links
// =============================================================================

mod anchor;
mod token;

pub use anchor::extract_links;
