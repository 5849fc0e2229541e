//! Markup serializer for the Birch HTML toolkit.
//!
//! Turns a [`Node`] tree back into text, either compact (no whitespace added)
//! or indented (one element per line). Void elements always render in
//! self-closing form, whatever they carry.
//!
//! Attribute values and text are written as stored. An attribute value
//! containing `"` is wrapped in single quotes so the output can be read back
//! by the Birch parser. A value containing both quote kinds is the one case
//! that is escaped: it stays in double quotes with each `"` written as
//! `&quot;`. The markup stays well formed, but the parser does not decode
//! entities, so such a value does not read back unchanged.
//!
//! Rendering recurses once per level of nesting, so extremely deep trees
//! (tens of thousands of levels) can exhaust the call stack.

use birch_dom::{AttributesMap, Node};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Children and text concatenated with nothing in between.
    #[default]
    Compact,
    /// One element per line, indented by depth; text trimmed.
    Indented,
}

/// Serializes node trees to markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    mode: RenderMode,
    indent_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderMode::default())
    }
}

impl Renderer {
    /// Spaces per depth level in indented mode unless configured otherwise.
    pub const DEFAULT_INDENT_WIDTH: usize = 4;

    /// Create a renderer for `mode`.
    #[must_use]
    pub const fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            indent_width: Self::DEFAULT_INDENT_WIDTH,
        }
    }

    /// Compact renderer.
    #[must_use]
    pub const fn compact() -> Self {
        Self::new(RenderMode::Compact)
    }

    /// Indented renderer with the default width.
    #[must_use]
    pub const fn indented() -> Self {
        Self::new(RenderMode::Indented)
    }

    /// Set the number of spaces per depth level (indented mode only).
    #[must_use]
    pub const fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// The configured layout.
    #[must_use]
    pub const fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render `node` and its subtree.
    #[must_use]
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        match self.mode {
            RenderMode::Compact => render_compact(node, &mut out),
            RenderMode::Indented => self.render_indented(node, 0, &mut out),
        }
        out
    }

    fn render_indented(&self, node: &Node, depth: usize, out: &mut String) {
        let pad = " ".repeat(depth * self.indent_width);
        let attributes = render_attributes(&node.attributes);

        if node.is_void() {
            out.push_str(&format!("{pad}<{}{attributes} />", node.tag));
            return;
        }

        let text = node
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());

        if node.children.is_empty() {
            let text = text.unwrap_or_default();
            out.push_str(&format!("{pad}<{tag}{attributes}>{text}</{tag}>", tag = node.tag));
            return;
        }

        out.push_str(&format!("{pad}<{}{attributes}>\n", node.tag));
        if let Some(text) = text {
            let child_pad = " ".repeat((depth + 1) * self.indent_width);
            out.push_str(&format!("{child_pad}{text}\n"));
        }
        for child in &node.children {
            self.render_indented(child, depth + 1, out);
            out.push('\n');
        }
        out.push_str(&format!("{pad}</{}>", node.tag));
    }
}

fn render_compact(node: &Node, out: &mut String) {
    let attributes = render_attributes(&node.attributes);

    if node.is_void() {
        out.push_str(&format!("<{}{attributes}/>", node.tag));
        return;
    }

    out.push_str(&format!("<{}{attributes}>", node.tag));
    if let Some(text) = &node.text {
        out.push_str(text);
    }
    for child in &node.children {
        render_compact(child, out);
    }
    out.push_str(&format!("</{}>", node.tag));
}

/// Render an attribute list as ` key="value"` pairs in map order.
///
/// Values holding `"` switch to single quotes; values holding both quote
/// kinds keep double quotes and write `"` as `&quot;`.
///
/// Returns an empty string when there are no attributes.
#[must_use]
pub fn render_attributes(attributes: &AttributesMap) -> String {
    attributes
        .iter()
        .map(|(key, value)| match (value.contains('"'), value.contains('\'')) {
            (false, _) => format!(" {key}=\"{value}\""),
            (true, false) => format!(" {key}='{value}'"),
            (true, true) => format!(" {key}=\"{}\"", value.replace('"', "&quot;")),
        })
        .collect()
}

/// Render `node` compactly.
#[must_use]
pub fn render(node: &Node) -> String {
    Renderer::compact().render(node)
}

/// Render `node` with four-space indentation.
#[must_use]
pub fn render_pretty(node: &Node) -> String {
    Renderer::indented().render(node)
}
