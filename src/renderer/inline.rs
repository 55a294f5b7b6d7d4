use super::style::Style;
use super::Renderer;
use crate::markdown::Inline;

/// Shown in place of a link destination the source left empty
const UNKNOWN_DESTINATION: &str = "unknown";

impl Renderer {
    /// Render a run of inline nodes to a single styled line
    pub fn render_inline(&self, children: &[Inline]) -> String {
        children
            .iter()
            .map(|inline| self.render_inline_node(inline))
            .collect()
    }

    fn render_inline_node(&self, inline: &Inline) -> String {
        match inline {
            Inline::Text(text) => text.clone(),
            Inline::Emphasis(children) => self.paint(&self.render_inline(children), &[Style::Italic]),
            Inline::Strong(children) => self.paint(&self.render_inline(children), &[Style::Bold]),
            Inline::Strikethrough(children) => {
                self.paint(&self.render_inline(children), &[Style::CrossedOut])
            }
            Inline::Code(code) => self.paint(code, &[Style::Yellow]),
            Inline::Link {
                destination,
                children,
            } => {
                let label = self.paint(&self.render_inline(children), &[Style::Underline]);
                let url = destination.as_deref().unwrap_or(UNKNOWN_DESTINATION);
                let url = self.paint(&format!(" ({url})"), &[Style::Dim]);
                label + &url
            }
            Inline::Unknown => String::new(),
        }
    }
}
