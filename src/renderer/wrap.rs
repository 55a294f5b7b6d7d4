//! Greedy word wrap

use super::style::visible_width;

/// Wrap `text` to `width` columns, breaking only at spaces.
///
/// Runs of spaces collapse. A word wider than `width` gets a line of its
/// own and is never split. Widths are measured without escape sequences,
/// so styled text wraps the same as its plain form.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    // Zero-width words (bare escape sequences) ride along with the next word
    let mut pending = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_width = visible_width(word);
        if word_width == 0 {
            pending.push_str(word);
            continue;
        }

        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&pending);
        current.push_str(word);
        current_width += word_width;
        pending.clear();
    }

    current.push_str(&pending);
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
