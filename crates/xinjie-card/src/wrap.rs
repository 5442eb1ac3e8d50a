//! Punctuation-aware greedy line breaking for the card body.

/// Clause and sentence marks a line may end on
pub const BREAK_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '、', ',', '.', '!', '?', ';', ':',
];

const QUOTE_PAIRS: [(char, char); 6] = [
    ('"', '"'),
    ('\'', '\''),
    ('“', '”'),
    ('‘', '’'),
    ('「', '」'),
    ('『', '』'),
];

/// Dash that opens a new line instead of ending the current one
const DASH: &str = "——";

/// Punctuation a full line may still absorb before it is forced to break
const MAX_OVERHANG: usize = 2;

pub fn is_break_punctuation(c: char) -> bool {
    BREAK_PUNCTUATION.contains(&c)
}

/// Remove quotation marks wrapping the whole text, repeatedly.
///
/// A pair is only removed when the opening mark is closed by the final
/// character, so `“a”b“c”` keeps its quotes.
pub fn strip_quotes(text: &str) -> &str {
    let mut text = text.trim();

    loop {
        let inner = QUOTE_PAIRS.iter().find_map(|&(open, close)| {
            text.strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
                .filter(|inner| encloses(inner, open, close))
        });

        match inner {
            Some(inner) => text = inner.trim(),
            None => return text,
        }
    }
}

fn encloses(inner: &str, open: char, close: char) -> bool {
    if open == close {
        return !inner.contains(open);
    }

    let mut depth = 1usize;
    for c in inner.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return false;
            }
        }
    }
    depth == 1
}

/// Characters that fit between the side margins at `font_size`
pub fn max_chars_per_line(width: f32, margin: f32, font_size: f32) -> usize {
    let usable = (width - 2.0 * margin).max(0.0);
    ((usable / font_size).floor() as usize).max(1)
}

/// Greedy wrap.
///
/// A line closes after a punctuation mark, or once it holds `max_chars`
/// characters. Punctuation following a full line is pulled onto it rather
/// than opening the next line, up to `MAX_OVERHANG` marks. A `——` dash
/// always starts a new line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' || c == '\r' {
            close_line(&mut lines, &mut current, &mut count);
            continue;
        }
        if c.is_whitespace() && (count == 0 || current.ends_with(DASH)) {
            continue;
        }

        let opens_dash = c == '—' && chars.get(i + 1) == Some(&'—');
        if opens_dash {
            close_line(&mut lines, &mut current, &mut count);
            current.push(c);
            count += 1;
            continue;
        }

        current.push(c);
        count += 1;

        let next_is_punctuation = chars
            .get(i + 1)
            .is_some_and(|&next| is_break_punctuation(next));
        if next_is_punctuation && count < max_chars + MAX_OVERHANG {
            continue;
        }

        if is_break_punctuation(c) || count >= max_chars {
            close_line(&mut lines, &mut current, &mut count);
        }
    }
    close_line(&mut lines, &mut current, &mut count);

    lines
}

fn close_line(lines: &mut Vec<String>, current: &mut String, count: &mut usize) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
    *count = 0;
}
