//! HTML tokenizer and tree builder for the Birch toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - splits markup into tag spans and text runs, with a pull cursor
//!   that skips whitespace-only tokens
//! - **Parser** - builds a [`Node`] tree from the token stream using a stack of
//!   open elements
//!
//! The parser is forgiving: it never rejects input. Each repair it makes is
//! recorded as a [`ParseIssue`], and strict mode turns the first one into a
//! [`ParseError`].
//!
//! # Not Implemented
//!
//! - Comments, CDATA and raw-text (script/style) content
//! - Character reference decoding
//! - Encoding sniffing

/// Tree construction from the token stream.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use birch_dom::Node;
pub use parser::{HTMLParser, ParseError, ParseIssue, ParseIssueKind};
pub use tokenizer::{HTMLTokenizer, Token};

/// Parse `input` with the default forgiving policies.
///
/// Returns `None` when the input contains no elements.
#[must_use]
pub fn parse(input: &str) -> Option<Node> {
    HTMLParser::new(input).run()
}
