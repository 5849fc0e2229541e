use core::fmt;

use strum::EnumMessage;
use strum_macros::{Display, EnumMessage, EnumString};
use thiserror::Error;

use birch_common::warning::{clear_warnings, warn_once};
use birch_dom::Node;

use crate::tokenizer::helpers::{scan_attributes, tag_name};
use crate::tokenizer::{HTMLTokenizer, Token};

/// The kinds of malformed markup the parser repairs or ignores.
///
/// Each kind carries a fixed summary ([`EnumMessage::get_message`]) that
/// contains no document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumMessage)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseIssueKind {
    /// A closing tag arrived while no element was open. The token is ignored.
    #[strum(message = "closing tag with no open element ignored")]
    StrayEndTag,
    /// A closing tag's name differs from the element it closed. The element
    /// is closed anyway.
    #[strum(message = "closing tag closed an element with a different name")]
    MismatchedEndTag,
    /// An element was still open at end of input.
    #[strum(message = "element left open at end of input")]
    UnclosedElement,
    /// A void element appeared while no element was open. It is dropped.
    #[strum(message = "void element outside any element dropped")]
    OrphanVoidElement,
    /// Text appeared while no element was open. It is dropped.
    #[strum(message = "text outside any element dropped")]
    OrphanText,
    /// Text appeared inside an element that does not carry text. It is
    /// dropped.
    #[strum(message = "text inside an element that carries no text dropped")]
    DroppedText,
    /// A `<...>` span had no identifier after `<`. No element is created.
    #[strum(message = "tag span without a tag name ignored")]
    MissingTagName,
}

/// A recoverable problem found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What kind of repair the parser made.
    pub kind: ParseIssueKind,
    /// Human-readable description.
    pub message: String,
    /// Index into the raw token list ([`HTMLTokenizer::tokens`]) of the token
    /// that triggered the issue.
    pub token_index: usize,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (token {}): {}", self.kind, self.token_index, self.message)
    }
}

/// Error returned by [`HTMLParser::run_strict`].
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The markup needed repair; carries the first issue found.
    #[error("malformed markup: {0}")]
    Malformed(ParseIssue),
}

/// Builds a [`Node`] tree from markup with a stack of open elements.
///
/// The parser owns its tokenizer and pulls tokens until the cursor is
/// exhausted. It never rejects input: closing tags simply close whatever is on
/// top of the stack, and anything it cannot place is dropped and recorded as a
/// [`ParseIssue`].
pub struct HTMLParser {
    tokenizer: HTMLTokenizer,

    /// Open elements; the last entry is the current element.
    stack_of_open_elements: Vec<Node>,

    /// Most recently closed element that had no open parent.
    last_completed: Option<Node>,

    /// Raw index of the token being processed.
    token_index: usize,

    /// Whether we've stopped parsing.
    stopped: bool,

    /// Parse issues encountered during parsing.
    issues: Vec<ParseIssue>,

    /// If true, stop at the first parse issue.
    strict_mode: bool,
}

impl HTMLParser {
    /// Create a parser for `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::from_tokenizer(HTMLTokenizer::new(input))
    }

    /// Create a parser that pulls from an existing tokenizer.
    #[must_use]
    pub const fn from_tokenizer(tokenizer: HTMLTokenizer) -> Self {
        Self {
            tokenizer,
            stack_of_open_elements: Vec::new(),
            last_completed: None,
            token_index: 0,
            stopped: false,
            issues: Vec::new(),
            strict_mode: false,
        }
    }

    /// Enable strict mode - parsing stops at the first parse issue.
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Get all parse issues encountered so far.
    #[must_use]
    pub fn get_issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Run the parser and return the root element.
    ///
    /// If elements are still open at end of input, the outermost one is
    /// returned as-is. Otherwise the last element closed at the top level is
    /// returned. `None` means the input produced no element at all.
    #[must_use]
    pub fn run(mut self) -> Option<Node> {
        self.process_all();
        self.finish()
    }

    /// Run the parser and return the root along with every parse issue.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Option<Node>, Vec<ParseIssue>) {
        self.process_all();
        let root = self.finish();
        (root, self.issues)
    }

    /// Run the parser, failing if any parse issue was recorded.
    ///
    /// Combine with [`HTMLParser::with_strict_mode`] to stop at the first
    /// issue instead of parsing to the end.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] carrying the first issue found.
    pub fn run_strict(mut self) -> Result<Option<Node>, ParseError> {
        self.process_all();
        let root = self.finish();
        match self.issues.into_iter().next() {
            Some(issue) => Err(ParseError::Malformed(issue)),
            None => Ok(root),
        }
    }

    fn process_all(&mut self) {
        // Warnings are deduplicated per document
        clear_warnings();
        while !self.stopped {
            let Some(token) = self.tokenizer.next_token() else {
                break;
            };
            self.token_index = self.tokenizer.position().saturating_sub(1);
            self.process_token(&token);
        }
    }

    fn process_token(&mut self, token: &Token) {
        match token {
            Token::EndTag(raw) => self.handle_end_tag(raw),
            Token::StartTag(raw) => self.handle_start_tag(raw),
            Token::Text(text) => self.handle_text(text),
        }
    }

    /// Pop the current element and attach it to the new current element.
    fn handle_end_tag(&mut self, raw: &str) {
        let Some(element) = self.stack_of_open_elements.pop() else {
            self.parse_issue(
                ParseIssueKind::StrayEndTag,
                &format!("closing tag {raw} with no open element"),
            );
            return;
        };

        if tag_name(raw).is_some_and(|name| name != element.tag) {
            self.parse_issue(
                ParseIssueKind::MismatchedEndTag,
                &format!("closing tag {raw} closed <{}>", element.tag),
            );
        }

        tracing::trace!(tag = %element.tag, depth = self.stack_of_open_elements.len(), "close element");
        match self.stack_of_open_elements.last_mut() {
            Some(parent) => parent.append_child(element),
            None => self.last_completed = Some(element),
        }
    }

    /// Create an element; void elements attach immediately, others are pushed.
    fn handle_start_tag(&mut self, raw: &str) {
        let Some(name) = tag_name(raw) else {
            self.parse_issue(
                ParseIssueKind::MissingTagName,
                &format!("no tag name in {raw}"),
            );
            return;
        };
        let element = Node::with_attributes(name, scan_attributes(raw));

        if element.is_void() {
            match self.stack_of_open_elements.last_mut() {
                Some(parent) => parent.append_child(element),
                None => self.parse_issue(
                    ParseIssueKind::OrphanVoidElement,
                    &format!("<{}> outside any element was dropped", element.tag),
                ),
            }
            return;
        }

        tracing::trace!(tag = %element.tag, depth = self.stack_of_open_elements.len(), "open element");
        self.stack_of_open_elements.push(element);
    }

    /// Set or extend the current element's text if it carries text.
    fn handle_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let Some(current) = self.stack_of_open_elements.last_mut() else {
            self.parse_issue(
                ParseIssueKind::OrphanText,
                &format!("text {text:?} outside any element was dropped"),
            );
            return;
        };

        if current.is_text_bearing() {
            current.append_text(text);
        } else {
            let tag = current.tag.clone();
            self.parse_issue(
                ParseIssueKind::DroppedText,
                &format!("text {text:?} inside <{tag}> was dropped"),
            );
        }
    }

    /// Produce the result once the token stream is exhausted.
    fn finish(&mut self) -> Option<Node> {
        if self.stack_of_open_elements.is_empty() {
            return self.last_completed.take();
        }

        let unclosed: Vec<String> = self
            .stack_of_open_elements
            .iter()
            .map(|element| element.tag.clone())
            .collect();
        for tag in unclosed {
            self.parse_issue(
                ParseIssueKind::UnclosedElement,
                &format!("<{tag}> was never closed"),
            );
        }

        std::mem::take(&mut self.stack_of_open_elements)
            .into_iter()
            .next()
    }

    /// Record a parse issue.
    ///
    /// Warns once per issue kind via birch-common's warning system; the
    /// document-specific `message` goes to the debug log and the stored issue.
    /// In strict mode this also stops parsing.
    fn parse_issue(&mut self, kind: ParseIssueKind, message: &str) {
        let summary = kind.get_message().unwrap_or_default();
        let _ = warn_once("HTML Parser", &format!("{kind}: {summary}"));
        tracing::debug!(%kind, token_index = self.token_index, "{message}");
        self.issues.push(ParseIssue {
            kind,
            message: message.to_string(),
            token_index: self.token_index,
        });
        if self.strict_mode {
            self.stopped = true;
        }
    }
}
