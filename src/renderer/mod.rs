//! Terminal renderer module
//!
//! Turns a parsed Markdown document into styled, word-wrapped text.
//! Blocks are rendered one at a time and joined with a blank line;
//! inline runs become a single styled line; only paragraphs wrap.

mod inline;
pub mod style;
mod wrap;

pub use style::Style;
pub use wrap::wrap;

use crate::markdown::{Block, Document, ListItem};

/// Wrap column used when the terminal width is unknown
pub const DEFAULT_WIDTH: usize = 80;

const BULLET: &str = "• ";
const QUOTE_INDENT: &str = "    ";

/// Settings shared by every render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Paragraph wrap column (at least 1)
    pub width: usize,
    /// Emit terminal escape sequences; plain text when false
    pub styled: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            styled: true,
        }
    }
}

/// Markdown to terminal text renderer
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a complete document, one blank line between blocks
    pub fn render(&self, document: &Document) -> String {
        let mut output = String::new();

        for block in &document.blocks {
            let rendered = self.render_block(block);
            let rendered = trim_block(&rendered);
            if rendered.is_empty() {
                continue;
            }
            output.push_str(rendered);
            output.push_str("\n\n");
        }

        tracing::debug!(
            blocks = document.blocks.len(),
            bytes = output.len(),
            "rendered document"
        );

        trim_block(&output).to_string()
    }

    /// Render a single block, recursing into nested blocks
    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, children } => {
                let prefix = "#".repeat(usize::from(*level));
                let line = format!("{} {}", prefix, self.render_inline(children));
                self.paint(&line, &[Style::Bold, Style::White])
            }
            Block::Paragraph(children) => wrap(&self.render_inline(children), self.options.width),
            Block::UnorderedList(items) => items
                .iter()
                .map(|item| format!("{}{}", BULLET, self.render_list_item(item)))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::OrderedList { start, items } => self.render_ordered_list(*start, items),
            Block::ListItem(item) => self.render_list_item(item),
            Block::BlockQuote(children) => self.render_block_quote(children),
            Block::CodeBlock { code, .. } => {
                // The parser keeps the closing line terminator
                let code = code.strip_suffix('\n').unwrap_or(code);
                format!("\n{}\n", self.paint(code, &[Style::LightYellow]))
            }
            Block::Unknown => String::new(),
        }
    }

    /// Number items from `start`, one item per line
    fn render_ordered_list(&self, start: u64, items: &[ListItem]) -> String {
        items
            .iter()
            .zip((0u64..).map(|offset| start.saturating_add(offset)))
            .map(|(item, number)| format!("{}. {}", number, self.render_list_item(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A list item's blocks collapse onto one logical line
    fn render_list_item(&self, item: &ListItem) -> String {
        item.children
            .iter()
            .map(|child| self.render_block(child))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_block_quote(&self, children: &[Block]) -> String {
        let quoted = children
            .iter()
            .map(|child| {
                let rendered = self.render_block(child);
                let indented = rendered.replace('\n', &format!("\n{QUOTE_INDENT}"));
                format!("{QUOTE_INDENT}{indented}")
            })
            .collect::<Vec<_>>()
            .join("\n");

        self.paint(&quoted, &[Style::Italic, Style::Blue])
    }

    /// Apply styles when styling is enabled
    fn paint(&self, text: &str, styles: &[Style]) -> String {
        if self.options.styled {
            style::style(text, styles)
        } else {
            text.to_string()
        }
    }
}

/// Drop surrounding blank lines and trailing whitespace, keeping the
/// leading indentation of the first non-blank line
fn trim_block(text: &str) -> &str {
    let text = text.trim_end();
    let blank_prefix = text.len() - text.trim_start().len();
    match text[..blank_prefix].rfind('\n') {
        Some(newline) => &text[newline + 1..],
        None => text,
    }
}
