use super::token::Token;

/// Splits markup into tokens and hands them out one at a time.
///
/// Tokenization is eager: [`HTMLTokenizer::new`] scans the whole input up
/// front, and [`HTMLTokenizer::next_token`] is a cursor over the result. The
/// cursor is meant for a single consumer.
#[derive(Debug, Clone)]
pub struct HTMLTokenizer {
    tokens: Vec<Token>,
    position: usize,
}

impl HTMLTokenizer {
    /// Tokenize `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let tokens = tokenize(input);
        tracing::trace!(count = tokens.len(), "tokenized input");
        Self {
            tokens,
            position: 0,
        }
    }

    /// All raw tokens, untrimmed, including whitespace-only text runs.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the tokenizer and return the raw token list.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Index of the next raw token the cursor will look at.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the next token, trimmed.
    ///
    /// Tokens that are empty after trimming are skipped entirely. Returns
    /// `None` once the token list is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(token) = self.tokens.get(self.position) {
            self.position += 1;
            if let Some(trimmed) = token.trimmed() {
                return Some(trimmed);
            }
        }
        None
    }
}

impl Iterator for HTMLTokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scan `input` into alternating tag spans and text runs.
///
/// A span runs from `<` to the first following `>` and must have at least
/// one character in between. A `<` that cannot start a span is skipped.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        if let Some(after_open) = rest.strip_prefix('<') {
            match after_open.find('>') {
                Some(close) if close > 0 => {
                    // '<' + body + '>'
                    let span_len = close + 2;
                    tokens.push(Token::from_span(&rest[..span_len]));
                    rest = &rest[span_len..];
                }
                _ => rest = after_open,
            }
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            tokens.push(Token::Text(rest[..end].to_string()));
            rest = &rest[end..];
        }
    }

    tokens
}
