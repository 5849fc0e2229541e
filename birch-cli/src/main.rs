//! Birch CLI
//!
//! Parse markup, query the tree and print it back out.
//!
//! Usage:
//!   birch <file>                  Parse and print the tree as indented markup
//!   birch <file> --json           Print the tree projection as JSON
//!   birch <file> --tokens         Show the raw tokens
//!   birch <file> --class lead     Print every element with class "lead"
//!   birch --html '<p>Hello</p>'   Parse an inline string
//!   cat page.html | birch         Read from stdin

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use birch_dom::Node;
use birch_html::{HTMLParser, HTMLTokenizer, Token};
use birch_query::{Query, Selector, exclude, get_text};
use birch_render::Renderer;

/// Birch: forgiving HTML parsing, querying and rendering
#[derive(Parser, Debug)]
#[command(name = "birch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Pretty-print a file
    birch ./index.html

    # Count links anywhere in the page
    birch ./index.html --tag a --count

    # Text of the element with id "main", with link elements removed
    birch ./index.html --id main --exclude link --text

    # Fail on the first markup problem
    birch --strict --html '<ul><li>x</ul>'
"#)]
struct Cli {
    /// Path to an HTML file (stdin is read when neither this nor --html is given)
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse an HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Render compact markup instead of indented markup
    #[arg(short, long)]
    compact: bool,

    /// Spaces per level for indented markup
    #[arg(long, value_name = "N", default_value_t = Renderer::DEFAULT_INDENT_WIDTH)]
    indent: usize,

    /// Print the JSON projection of each result
    #[arg(short, long)]
    json: bool,

    /// Print a colored outline of each result
    #[arg(long)]
    tree: bool,

    /// Print the extracted text of each result
    #[arg(long)]
    text: bool,

    /// Show the raw token list before parsing
    #[arg(short, long)]
    tokens: bool,

    /// Only elements with this tag
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,

    /// Only elements with this id
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Only elements carrying this class
    #[arg(long = "class", value_name = "CLASS")]
    class_name: Option<String>,

    /// Print the number of matching elements instead of the elements
    #[arg(long)]
    count: bool,

    /// Remove elements with this tag (at any depth) before querying; repeatable
    #[arg(long, value_name = "TAG")]
    exclude: Vec<String>,

    /// Fail on the first markup problem instead of repairing it
    #[arg(long)]
    strict: bool,

    /// List every markup problem the parser repaired
    #[arg(long)]
    issues: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn has_selector(&self) -> bool {
        self.tag.is_some() || self.id.is_some() || self.class_name.is_some()
    }

    fn selector(&self) -> Selector<'static> {
        let mut selector = Selector::new();
        if let Some(tag) = &self.tag {
            selector = selector.tag(tag.clone());
        }
        if let Some(id) = &self.id {
            selector = selector.attr("id", id.clone());
        }
        if let Some(class_name) = &self.class_name {
            selector = selector.class(class_name.clone());
        }
        selector
    }

    fn renderer(&self) -> Renderer {
        if self.compact {
            Renderer::compact()
        } else {
            Renderer::indented().with_indent_width(self.indent)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = load_source(&cli)?;
    tracing::debug!(bytes = source.len(), "loaded source");

    if cli.tokens {
        print_tokens(HTMLTokenizer::new(&source).tokens());
    }

    let root = parse_root(&cli, &source)?;
    let root = if cli.exclude.is_empty() {
        root
    } else {
        exclude(vec![root], |node| cli.exclude.contains(&node.tag))
            .into_iter()
            .next()
            .context("the root element itself was excluded")?
    };

    let query = Query::new(&root);
    let targets = if cli.has_selector() {
        query.find_many(&cli.selector())
    } else {
        vec![query.root()]
    };

    if cli.count {
        println!("{}", targets.len());
        return Ok(());
    }

    let renderer = cli.renderer();
    for node in targets {
        if cli.text {
            println!("{}", get_text(node));
        } else if cli.json {
            println!("{}", serde_json::to_string_pretty(node)?);
        } else if cli.tree {
            print_tree(node, 0);
        } else {
            println!("{}", renderer.render(node));
        }
    }

    Ok(())
}

/// Install the `tracing` subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read markup from `--html`, the file argument, or stdin.
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    match &cli.path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}

/// Parse the source, honouring `--strict` and `--issues`.
fn parse_root(cli: &Cli, source: &str) -> Result<Node> {
    let parser = HTMLParser::new(source);
    let root = if cli.strict {
        parser.with_strict_mode().run_strict()?
    } else {
        let (root, issues) = parser.run_with_issues();
        if cli.issues {
            for issue in &issues {
                eprintln!("{} {issue}", "issue:".yellow());
            }
        }
        root
    };
    match root {
        Some(root) => Ok(root),
        None => bail!("no elements found in input"),
    }
}

fn print_tokens(tokens: &[Token]) {
    for (index, token) in tokens.iter().enumerate() {
        let kind = match token {
            Token::StartTag(_) => "start",
            Token::EndTag(_) => "end",
            Token::Text(_) => "text",
        };
        println!("{:>4} {:<5} {:?}", index.dimmed(), kind.cyan(), token.raw());
    }
}

/// Print a node tree as an indented outline.
fn print_tree(node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    if node.attributes.is_empty() {
        println!("{prefix}<{}>", node.tag.cyan());
    } else {
        let attrs: Vec<String> = node
            .attributes
            .iter()
            .map(|(k, v)| format!("{}=\"{v}\"", k.yellow()))
            .collect();
        println!("{prefix}<{} {}>", node.tag.cyan(), attrs.join(" "));
    }
    if let Some(text) = &node.text {
        println!("{prefix}  {}", format!("{text:?}").green());
    }
    for child in &node.children {
        print_tree(child, indent + 1);
    }
}
