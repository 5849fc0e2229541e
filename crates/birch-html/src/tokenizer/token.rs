use core::fmt;

/// A lexical unit produced by the tokenizer.
///
/// Tag tokens keep their raw span (including the angle brackets); the parser
/// reads the tag name and attributes out of it with the helpers in
/// [`super::helpers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A `<...>` span that does not start with `</`.
    StartTag(String),
    /// A `</...>` span.
    EndTag(String),
    /// A run of characters containing no `<`.
    Text(String),
}

impl Token {
    /// Classify a raw `<...>` span as a start or end tag.
    #[must_use]
    pub fn from_span(span: &str) -> Self {
        if span.starts_with("</") {
            Self::EndTag(span.to_string())
        } else {
            Self::StartTag(span.to_string())
        }
    }

    /// The raw text of this token.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::StartTag(raw) | Self::EndTag(raw) | Self::Text(raw) => raw,
        }
    }

    /// Returns true for start and end tag tokens.
    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self, Self::StartTag(_) | Self::EndTag(_))
    }

    /// Returns this token with surrounding whitespace removed, or `None` if
    /// nothing is left.
    #[must_use]
    pub fn trimmed(&self) -> Option<Self> {
        let trimmed = self.raw().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match self {
            Self::StartTag(_) => Self::StartTag(trimmed.to_string()),
            Self::EndTag(_) => Self::EndTag(trimmed.to_string()),
            Self::Text(_) => Self::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}
