use crate::geometry::Size;

#[derive(Default)]
struct LineCursor {
    width: f32,
    has_content: bool,
}

/// Breaks `text` into lines no wider than `max_width` and returns each line's
/// width.
///
/// `advance(prev, ch)` returns the horizontal advance of `ch` when it follows
/// `prev` on the same line, so kerning-aware measurers can adjust pairs.
///
/// Rules:
/// - `'\n'` always starts a new line; an empty paragraph still takes a line.
/// - Words are separated by whitespace and joined by a single space advance.
/// - A word wider than `max_width` on its own is broken between characters.
///   A single character wider than the limit still gets its own line.
///
/// Empty text produces no lines at all.
pub fn wrap_line_widths(
    text: &str,
    max_width: f32,
    mut advance: impl FnMut(Option<char>, char) -> f32,
) -> Vec<f32> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    let space = advance(None, ' ');

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut line = LineCursor::default();

        for word in paragraph.split_whitespace() {
            let mut word_width = 0.0;
            let mut prev = None;
            for ch in word.chars() {
                word_width += advance(prev, ch);
                prev = Some(ch);
            }

            if line.has_content {
                if line.width + space + word_width <= max_width {
                    line.width += space + word_width;
                    continue;
                }
                lines.push(line.width);
                line = LineCursor::default();
            }

            if word_width <= max_width {
                line.width = word_width;
                line.has_content = true;
                continue;
            }

            // hard break
            let mut prev = None;
            for ch in word.chars() {
                let mut width = advance(prev, ch);
                if line.has_content && line.width + width > max_width {
                    lines.push(line.width);
                    line = LineCursor::default();
                    width = advance(None, ch);
                }
                line.width += width;
                line.has_content = true;
                prev = Some(ch);
            }
        }

        lines.push(line.width);
    }

    lines
}

/// Bounding size of wrapped lines sharing one line height.
pub fn measured_size(line_widths: &[f32], line_height: f32) -> Size {
    if line_widths.is_empty() {
        return Size::zero();
    }
    let width = line_widths.iter().copied().fold(0.0_f32, f32::max);
    Size::new(width, line_widths.len() as f32 * line_height)
}
