//! Lexical helpers for tag spans.
//!
//! These read a raw `<...>` span without a state machine:
//! - [`tag_name`] - the identifier right after `<` or `</`
//! - [`scan_attributes`] - every `key="value"` / `key='value'` pair
//!
//! Anything that does not fit those shapes is ignored.

use birch_dom::AttributesMap;

/// Characters allowed in tag and attribute names.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Extract the tag name from a start or end tag span.
///
/// The name must begin immediately after `<` (or `</`); `< p>` and
/// `<!DOCTYPE html>` have no tag name.
#[must_use]
pub fn tag_name(span: &str) -> Option<&str> {
    let rest = span
        .strip_prefix("</")
        .or_else(|| span.strip_prefix('<'))?;
    let len = rest
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(rest.len());
    (len > 0).then_some(&rest[..len])
}

/// Collect every quoted `key=value` assignment in a tag span.
///
/// The value must be wrapped in matching quotes; the other quote kind may
/// appear inside it. Unquoted values and unterminated quotes are dropped.
/// When a key repeats, the last value wins.
#[must_use]
pub fn scan_attributes(span: &str) -> AttributesMap {
    let mut attributes = AttributesMap::new();
    let mut rest = span;

    while let Some(start) = rest.find(is_identifier_char) {
        let word = &rest[start..];
        let name_len = word
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(word.len());
        let name = &word[..name_len];
        rest = &word[name_len..];

        if let Some((value, remainder)) = quoted_value(rest) {
            let _ = attributes.insert(name.to_string(), value.to_string());
            rest = remainder;
        }
    }

    attributes
}

/// Read `="value"` or `='value'` from the start of `input`.
///
/// Returns the value and whatever follows the closing quote.
fn quoted_value(input: &str) -> Option<(&str, &str)> {
    let after_eq = input.strip_prefix('=')?;
    let quote = after_eq.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let body = &after_eq[quote.len_utf8()..];
    let end = body.find(quote)?;
    Some((&body[..end], &body[end + quote.len_utf8()..]))
}
