//! Greedy word wrapping for banner body text.

/// Wrap one paragraph to at most `width` characters per line.
///
/// Words are whitespace-delimited and never split: a word longer than
/// `width` occupies a line of its own, in full. Runs of whitespace collapse
/// to a single space. A blank paragraph wraps to no lines at all.
pub fn wrap_paragraph(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}
