// src/extract/anchor.rs
// =============================================================================
// This module rebuilds <a href="...">text</a> pairs from a flat token stream.
//
// How it works:
// 1. Walk the tokens one at a time (no tree, no DOM)
// 2. A start tag `<a ...>` with at least one attribute opens an anchor
//    (a self-closing `<a ... />` never does)
// 3. While an anchor is open, every text token is appended to its text
// 4. `</a>` closes the anchor and produces one Link
// 5. End of input stops the scan; an anchor that never closed is dropped
//
// There are only two states (Idle and InAnchor), so malformed markup can't
// derail us: a stray `</a>` gets a warning and the scan simply continues.
//
// Rust concepts:
// - Enums with data: InAnchor carries the pending href and text
// - std::mem::replace: move the old state out while installing the new one
// - Generic functions: extract_links works with any std::io::Read
// =============================================================================

use super::token::{tokenize, PageToken};
use crate::link::Link;
use std::io::Read;
use std::mem;
use tracing::{debug, warn};

const ANCHOR: &str = "a";
const HREF: &str = "href";

// Where the state machine is between tokens
#[derive(Debug)]
enum AnchorState {
    Idle,
    InAnchor {
        /// href of the open start tag (None if it had attributes but no href)
        href: Option<String>,
        /// Text collected since the start tag
        text: String,
    },
}

/// Incremental anchor extractor for one page.
///
/// Feed it tokens in document order; it hands back a Link each time an
/// anchor closes.
#[derive(Debug)]
pub struct AnchorExtractor {
    depth: usize,
    state: AnchorState,
    /// Number of tokens fed so far
    position: usize,
    /// Last non-blank text seen, for diagnostics
    recent_text: String,
}

// How much of the recent text a warning quotes
const CONTEXT_CHARS: usize = 40;

impl AnchorExtractor {
    /// `depth` is the depth of the page the tokens come from.
    pub fn new(depth: usize) -> Self {
        AnchorExtractor {
            depth,
            state: AnchorState::Idle,
            position: 0,
            recent_text: String::new(),
        }
    }

    /// Processes one token, returning a Link if it closed an anchor.
    pub fn feed(&mut self, token: PageToken) -> Option<Link> {
        self.position += 1;
        match token {
            PageToken::Text(data) => {
                if !data.trim().is_empty() {
                    self.recent_text = data.trim().chars().take(CONTEXT_CHARS).collect();
                }
                if let AnchorState::InAnchor { text, .. } = &mut self.state {
                    text.push_str(&data);
                }
                None
            }
            PageToken::StartTag {
                name,
                attributes,
                self_closing,
            } if name == ANCHOR => {
                // An <a> with no attributes can't carry an href, so it never opens anything.
                // Neither does `<a ... />`, and neither does a second <a ...> while one is open.
                if self_closing
                    || attributes.is_empty()
                    || matches!(self.state, AnchorState::InAnchor { .. })
                {
                    return None;
                }
                self.state = AnchorState::InAnchor {
                    href: attributes.get(HREF).cloned(),
                    text: String::new(),
                };
                None
            }
            PageToken::EndTag { name } if name == ANCHOR => {
                match mem::replace(&mut self.state, AnchorState::Idle) {
                    AnchorState::Idle => {
                        warn!("{}", self.dangling_end_message());
                        None
                    }
                    AnchorState::InAnchor { href, text } => {
                        let link = Link::new(href.as_deref().unwrap_or(""), &text, self.depth);
                        debug!("Link found: {}", link);
                        Some(link)
                    }
                }
            }
            _ => None,
        }
    }

    // Describes where a stray </a> was found
    fn dangling_end_message(&self) -> String {
        if self.recent_text.is_empty() {
            format!("Link end found without start at token {}", self.position)
        } else {
            format!(
                "Link end found without start at token {}, after {:?}",
                self.position, self.recent_text
            )
        }
    }

    /// Ends the scan. An anchor that is still open is dropped without a record.
    pub fn finish(self) {
        if let AnchorState::InAnchor { href, .. } = self.state {
            debug!(
                "Dropping unclosed link at end of page: {}",
                href.as_deref().unwrap_or("<no href>")
            );
        }
    }
}

/// Runs a fresh extractor over `tokens` and collects every closed anchor, in document order.
pub fn extract_from_tokens<I>(tokens: I, depth: usize) -> Vec<Link>
where
    I: IntoIterator<Item = PageToken>,
{
    let mut extractor = AnchorExtractor::new(depth);
    let links: Vec<Link> = tokens
        .into_iter()
        .filter_map(|token| extractor.feed(token))
        .collect();
    extractor.finish();
    links
}

/// Tokenizes `reader` to the end and returns every anchor found.
///
/// The reader is fully consumed before this returns.
pub fn extract_links<R: Read>(reader: R, depth: usize) -> Vec<Link> {
    extract_from_tokens(tokenize(reader), depth)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not use a DOM parser (like scraper)?
//    - We only care about where anchors start and end, and their text
//    - A token stream is enough for that and uses far less memory
//    - Broken HTML (missing tags) can't make the scan fail
//
// 2. What does mem::replace do?
//    - It swaps a new value into a place and returns the old one
//    - Here we reset the state to Idle and get the old state by value,
//      so we can move the href/text Strings out without cloning
//
// 3. What is a match guard (`if name == ANCHOR`)?
//    - An extra condition on a match arm
//    - Tags that aren't `a` fall through to the `_ => None` arm
//
// 4. Why does finish() take `self`?
//    - It consumes the extractor so it can't be fed again afterwards
// -----------------------------------------------------------------------------
