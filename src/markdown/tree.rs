// ============================================================================
// Block Models
// ============================================================================

/// A parsed Markdown document: its top-level blocks in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A structural unit of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX or setext heading, level 1 through 6
    Heading { level: u8, children: Vec<Inline> },
    Paragraph(Vec<Inline>),
    UnorderedList(Vec<ListItem>),
    /// Numbered list; `start` is the number of the first item (normally 1)
    OrderedList { start: u64, items: Vec<ListItem> },
    ListItem(ListItem),
    BlockQuote(Vec<Block>),
    /// Fenced or indented code. The language tag is kept but never rendered.
    CodeBlock {
        code: String,
        #[allow(dead_code)]
        language: Option<String>,
    },
    /// Rules, HTML, tables and anything else without a rendering
    Unknown,
}

/// A single entry of an ordered or unordered list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub children: Vec<Block>,
}

// ============================================================================
// Inline Models
// ============================================================================

/// A run of text inside a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Code(String),
    /// Hyperlink; a missing destination renders as a placeholder
    Link {
        destination: Option<String>,
        children: Vec<Inline>,
    },
    Unknown,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl ListItem {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }
}

impl Inline {
    /// Shorthand for a plain text run
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }
}
