//! HTML tokenizer module.
//!
//! Tokenization alternates between tag spans (`<...>`, ended by the first `>`)
//! and runs of text. There is no awareness of quoted attribute values,
//! comments or CDATA.

/// Lexical helpers for reading tag names and attributes out of a tag span.
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;
/// Tokenizer and pull cursor.
pub mod core;

pub use self::core::HTMLTokenizer;
pub use token::Token;
