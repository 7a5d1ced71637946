use unicode_width::UnicodeWidthStr;

/// Hard-wrap by character, regardless of word boundaries.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));

        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }
        result.push(c);
    }

    result
}

/// Wrap prose on whitespace. Words wider than `width` are broken with
/// [`wrap_text`]. Explicit newlines start a new line.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in s.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.width()
            } else {
                line.width() + 1 + word.width()
            };
            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if word.width() > width {
                let mut pieces: Vec<String> =
                    wrap_text(word, width).lines().map(String::from).collect();
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            } else {
                line.push_str(word);
            }
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

pub fn truncate_text(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
