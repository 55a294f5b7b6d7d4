//! Builds a [`Document`] tree from the pulldown-cmark event stream

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use super::tree::{Block, Document, Inline, ListItem};

/// Parse Markdown source into a document tree
pub fn parse(source: &str) -> Document {
    let mut events = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
    let blocks = collect_blocks(&mut events);

    tracing::debug!(blocks = blocks.len(), "parsed markdown document");

    Document::new(blocks)
}

/// Collect blocks until the enclosing tag ends (or the stream runs out)
fn collect_blocks<'a, I>(events: &mut I) -> Vec<Block>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut blocks = Vec::new();
    // Inline content that appears outside a paragraph (tight list items)
    let mut loose = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::End(_) => break,
            Event::Start(tag) if is_inline_tag(&tag) => {
                let inline = inline_from_tag(tag, events);
                push_inline(&mut loose, inline);
            }
            Event::Start(tag) => {
                flush_loose(&mut loose, &mut blocks);
                blocks.push(block_from_tag(tag, events));
            }
            Event::Rule => {
                flush_loose(&mut loose, &mut blocks);
                blocks.push(Block::Unknown);
            }
            other => push_inline(&mut loose, inline_from_event(other)),
        }
    }

    flush_loose(&mut loose, &mut blocks);
    blocks
}

fn flush_loose(loose: &mut Vec<Inline>, blocks: &mut Vec<Block>) {
    if !loose.is_empty() {
        blocks.push(Block::Paragraph(std::mem::take(loose)));
    }
}

fn block_from_tag<'a, I>(tag: Tag<'a>, events: &mut I) -> Block
where
    I: Iterator<Item = Event<'a>>,
{
    match tag {
        Tag::Paragraph => Block::Paragraph(collect_inlines(events)),
        Tag::Heading { level, .. } => Block::Heading {
            level: level as u8,
            children: collect_inlines(events),
        },
        Tag::BlockQuote(_) => Block::BlockQuote(collect_blocks(events)),
        Tag::List(start) => {
            let items = collect_items(events);
            match start {
                Some(start) => Block::OrderedList { start, items },
                None => Block::UnorderedList(items),
            }
        }
        Tag::Item => Block::ListItem(ListItem::new(collect_blocks(events))),
        Tag::CodeBlock(kind) => {
            let language = match kind {
                CodeBlockKind::Fenced(info) => {
                    info.split_whitespace().next().map(str::to_string)
                }
                CodeBlockKind::Indented => None,
            };
            Block::CodeBlock {
                code: collect_code(events),
                language,
            }
        }
        _ => {
            skip_to_end(events);
            Block::Unknown
        }
    }
}

fn collect_items<'a, I>(events: &mut I) -> Vec<ListItem>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut items = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::Item) => items.push(ListItem::new(collect_blocks(events))),
            Event::Start(_) => skip_to_end(events),
            Event::End(_) => break,
            _ => {}
        }
    }

    items
}

fn collect_code<'a, I>(events: &mut I) -> String
where
    I: Iterator<Item = Event<'a>>,
{
    let mut code = String::new();

    for event in events.by_ref() {
        match event {
            Event::Text(text) => code.push_str(&text),
            Event::End(_) => break,
            _ => {}
        }
    }

    code
}

// ============================================================================
// Inlines
// ============================================================================

fn is_inline_tag(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn collect_inlines<'a, I>(events: &mut I) -> Vec<Inline>
where
    I: Iterator<Item = Event<'a>>,
{
    let mut inlines = Vec::new();

    while let Some(event) = events.next() {
        let inline = match event {
            Event::End(_) => break,
            Event::Start(tag) => inline_from_tag(tag, events),
            other => inline_from_event(other),
        };
        push_inline(&mut inlines, inline);
    }

    inlines
}

fn inline_from_tag<'a, I>(tag: Tag<'a>, events: &mut I) -> Inline
where
    I: Iterator<Item = Event<'a>>,
{
    match tag {
        Tag::Emphasis => Inline::Emphasis(collect_inlines(events)),
        Tag::Strong => Inline::Strong(collect_inlines(events)),
        Tag::Strikethrough => Inline::Strikethrough(collect_inlines(events)),
        Tag::Link { dest_url, .. } => {
            let destination = (!dest_url.is_empty()).then(|| dest_url.into_string());
            Inline::Link {
                destination,
                children: collect_inlines(events),
            }
        }
        _ => {
            skip_to_end(events);
            Inline::Unknown
        }
    }
}

fn inline_from_event(event: Event<'_>) -> Inline {
    match event {
        Event::Text(text) => Inline::Text(text.into_string()),
        Event::Code(code) => Inline::Code(code.into_string()),
        // Inline rendering is single-line; breaks collapse to a space
        Event::SoftBreak | Event::HardBreak => Inline::text(" "),
        _ => Inline::Unknown,
    }
}

/// Append an inline, merging adjacent text runs
fn push_inline(inlines: &mut Vec<Inline>, inline: Inline) {
    if let (Some(Inline::Text(last)), Inline::Text(text)) = (inlines.last_mut(), &inline) {
        last.push_str(text);
        return;
    }
    inlines.push(inline);
}

/// Consume events up to and including the end of the current tag
fn skip_to_end<'a, I>(events: &mut I)
where
    I: Iterator<Item = Event<'a>>,
{
    let mut depth = 0usize;

    for event in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heading() {
        let doc = parse("## Hi");
        assert_eq!(
            doc.blocks,
            vec![Block::Heading {
                level: 2,
                children: vec![Inline::text("Hi")],
            }]
        );
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse("").blocks.is_empty());
        assert!(parse("\n\n   \n").blocks.is_empty());
    }

    #[test]
    fn test_parse_paragraph_with_emphasis() {
        let doc = parse("plain *soft* and **loud** `code` ~~gone~~");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![
                Inline::text("plain "),
                Inline::Emphasis(vec![Inline::text("soft")]),
                Inline::text(" and "),
                Inline::Strong(vec![Inline::text("loud")]),
                Inline::text(" "),
                Inline::Code("code".to_string()),
                Inline::text(" "),
                Inline::Strikethrough(vec![Inline::text("gone")]),
            ])]
        );
    }

    #[test]
    fn test_soft_break_becomes_space() {
        let doc = parse("first line\nsecond line");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![Inline::text("first line second line")])]
        );
    }

    #[test]
    fn test_tight_list_items_wrap_inline_in_paragraph() {
        let doc = parse("* a\n* b\n");
        assert_eq!(
            doc.blocks,
            vec![Block::UnorderedList(vec![
                ListItem::new(vec![Block::Paragraph(vec![Inline::text("a")])]),
                ListItem::new(vec![Block::Paragraph(vec![Inline::text("b")])]),
            ])]
        );
    }

    #[test]
    fn test_ordered_list_keeps_start_index() {
        let doc = parse("3. foo\n4. bar\n");
        match &doc.blocks[0] {
            Block::OrderedList { start, items } => {
                assert_eq!(*start, 3);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected ordered list, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_list_stays_inside_item() {
        let doc = parse("- outer\n  - inner\n");
        let Block::UnorderedList(items) = &doc.blocks[0] else {
            panic!("expected unordered list");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].children.len(), 2);
        assert!(matches!(items[0].children[1], Block::UnorderedList(_)));
    }

    #[test]
    fn test_block_quote_children() {
        let doc = parse("> one\n>\n> two\n");
        assert_eq!(
            doc.blocks,
            vec![Block::BlockQuote(vec![
                Block::Paragraph(vec![Inline::text("one")]),
                Block::Paragraph(vec![Inline::text("two")]),
            ])]
        );
    }

    #[test]
    fn test_fenced_code_block_language() {
        let doc = parse("```rust\nfn main() {}\n```\n");
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                code: "fn main() {}\n".to_string(),
                language: Some("rust".to_string()),
            }]
        );
    }

    #[test]
    fn test_indented_code_block_has_no_language() {
        let doc = parse("    let x = 1;\n");
        assert!(matches!(
            &doc.blocks[0],
            Block::CodeBlock { language: None, code } if code == "let x = 1;\n"
        ));
    }

    #[test]
    fn test_link_destination() {
        let doc = parse("[go](http://x.com)");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![Inline::Link {
                destination: Some("http://x.com".to_string()),
                children: vec![Inline::text("go")],
            }])]
        );
    }

    #[test]
    fn test_link_without_destination() {
        let doc = parse("[go]()");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![Inline::Link {
                destination: None,
                children: vec![Inline::text("go")],
            }])]
        );
    }

    #[test]
    fn test_image_is_unknown_inline() {
        let doc = parse("see ![alt text](pic.png) here");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![
                Inline::text("see "),
                Inline::Unknown,
                Inline::text(" here"),
            ])]
        );
    }

    #[test]
    fn test_rule_and_html_are_unknown_blocks() {
        let doc = parse("before\n\n---\n\n<div>\nhi\n</div>\n\nafter\n");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph(vec![Inline::text("before")]),
                Block::Unknown,
                Block::Unknown,
                Block::Paragraph(vec![Inline::text("after")]),
            ]
        );
    }
}
