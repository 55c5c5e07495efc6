// src/extract/token.rs
// =============================================================================
// This module turns raw HTML bytes into a flat stream of tokens.
//
// We use the `html5gum` crate which:
// - Tokenizes HTML following the WHATWG rules (very tolerant of bad markup)
// - Reads from any std::io::Read, so we can feed it a response body directly
// - Does NOT build a tree, it just hands us tags and text one at a time
//
// html5gum has its own Token type; we convert it into our small PageToken
// enum so the anchor state machine doesn't depend on tokenizer details.
// =============================================================================

use html5gum::{DefaultEmitter, HtmlString, IoReader, Token, Tokenizer};
use std::collections::BTreeMap;
use std::io::Read;
use tracing::{trace, warn};

/// One event from the HTML token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageToken {
    /// `<name attr="value" ...>`; names are lower-cased, the first duplicate attribute wins
    StartTag {
        name: String,
        attributes: BTreeMap<String, String>,
        /// Written as `<name ... />`
        self_closing: bool,
    },
    /// `</name>`
    EndTag { name: String },
    /// A run of character data between tags
    Text(String),
    /// Comments, doctypes and recoverable parse errors
    Other,
}

// Shorthands for building token streams by hand
#[cfg(test)]
impl PageToken {
    pub(crate) fn start_tag(name: &str, attributes: &[(&str, &str)]) -> Self {
        PageToken::StartTag {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            self_closing: false,
        }
    }

    pub(crate) fn self_closing_tag(name: &str, attributes: &[(&str, &str)]) -> Self {
        let mut tag = PageToken::start_tag(name, attributes);
        if let PageToken::StartTag { self_closing, .. } = &mut tag {
            *self_closing = true;
        }
        tag
    }

    pub(crate) fn end_tag(name: &str) -> Self {
        PageToken::EndTag {
            name: name.to_string(),
        }
    }

    pub(crate) fn text(data: &str) -> Self {
        PageToken::Text(data.to_string())
    }
}

impl From<Token> for PageToken {
    fn from(token: Token) -> Self {
        match token {
            Token::StartTag(tag) => PageToken::StartTag {
                name: lossy(&tag.name),
                attributes: tag
                    .attributes
                    .iter()
                    .map(|(key, value)| (lossy(key), lossy(value)))
                    .collect(),
                self_closing: tag.self_closing,
            },
            Token::EndTag(tag) => PageToken::EndTag {
                name: lossy(&tag.name),
            },
            Token::String(data) => PageToken::Text(lossy(&data)),
            Token::Error(error) => {
                // Parse errors are recoverable, the tokenizer keeps going
                trace!("HTML parse error: {:?}", error);
                PageToken::Other
            }
            _ => PageToken::Other,
        }
    }
}

// Pages that aren't valid UTF-8 still get tokenized, bad bytes become U+FFFD
fn lossy(data: &HtmlString) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// Tokenizes everything `reader` yields.
///
/// The iterator ends when the input is exhausted. A read error also ends it
/// (after a warning), so callers always see a finite stream.
pub fn tokenize<R: Read>(reader: R) -> impl Iterator<Item = PageToken> {
    // Without state switching, `<a>` inside <script> or <style>
    // would be reported as a real tag
    let mut emitter = DefaultEmitter::default();
    emitter.switch_states(true);

    Tokenizer::new_with_emitter(IoReader::new(reader), emitter).map_while(|result| match result {
        Ok(token) => Some(PageToken::from(token)),
        Err(e) => {
            warn!("Stopped reading page: {}", e);
            None
        }
    })
}
