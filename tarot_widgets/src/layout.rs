//! Display-width aware helpers for composing fixed-width text blocks.
//!
//! Widths are measured in terminal cells: wide characters count as two and
//! ANSI escape sequences count as zero.

use unicode_width::UnicodeWidthChar;

/// Splits `s` into printable characters and escape sequences
pub(crate) fn segments(s: &str) -> impl Iterator<Item = (&str, usize)> + '_ {
    let mut rest = s;
    std::iter::from_fn(move || {
        let c = rest.chars().next()?;
        let end = if c == '\u{1b}' {
            escape_len(rest)
        } else {
            c.len_utf8()
        };
        let (segment, tail) = rest.split_at(end);
        rest = tail;
        let width = if c == '\u{1b}' {
            0
        } else {
            c.width().unwrap_or(0)
        };
        Some((segment, width))
    })
}

/// Byte length of the escape sequence at the start of `s`
fn escape_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if bytes.get(1) != Some(&b'[') {
        return 1;
    }
    bytes[2..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map_or(s.len(), |i| i + 3)
}

pub fn display_width(s: &str) -> usize {
    segments(s).map(|(_, width)| width).sum()
}

/// Longest prefix of `s` that fits in `width` cells, never splitting a
/// wide character. Escape sequences past the cut are kept so a trailing
/// reset still applies.
pub fn trim_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    let mut full = false;
    for (segment, w) in segments(s) {
        if is_escape(segment) {
            out.push_str(segment);
            continue;
        }
        if full || used + w > width {
            full = true;
            continue;
        }
        out.push_str(segment);
        used += w;
    }
    out
}

pub(crate) fn is_escape(segment: &str) -> bool {
    segment.starts_with('\u{1b}')
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Place blocks side by side, aligned to the top. Each block keeps its own
/// width and shorter blocks are padded at the bottom.
pub fn join_horizontal<S: AsRef<str>>(blocks: &[S]) -> String {
    let blocks: Vec<Vec<&str>> = blocks
        .iter()
        .map(|block| block.as_ref().split('\n').collect())
        .collect();
    let widths: Vec<usize> = blocks
        .iter()
        .map(|lines| lines.iter().map(|line| display_width(line)).max().unwrap_or(0))
        .collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|row| {
            blocks
                .iter()
                .zip(&widths)
                .map(|(lines, &width)| {
                    pad_right(lines.get(row).copied().unwrap_or(""), width)
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stack blocks top to bottom, left aligned and padded to the widest line.
pub fn join_vertical<S: AsRef<str>>(blocks: &[S]) -> String {
    let lines: Vec<&str> = blocks
        .iter()
        .flat_map(|block| block.as_ref().split('\n'))
        .collect();
    let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);

    lines
        .iter()
        .map(|line| pad_right(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("10♥"), 3);
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(display_width("\u{1b}[31mred\u{1b}[0m"), 3);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_trim_keeps_wide_chars_whole() {
        assert_eq!(trim_to_width("漢字漢", 4), "漢字");
        assert_eq!(trim_to_width("a漢字", 4), "a漢");
        assert_eq!(trim_to_width("abc", 10), "abc");
        assert_eq!(trim_to_width("abc", 0), "");
    }

    #[test]
    fn test_trim_keeps_escapes() {
        assert_eq!(trim_to_width("\u{1b}[31mabcdef", 2), "\u{1b}[31mab");
        assert_eq!(
            trim_to_width("\u{1b}[31mabcdef\u{1b}[0m", 2),
            "\u{1b}[31mab\u{1b}[0m"
        );
    }

    #[test]
    fn test_trim_stops_at_first_overflow() {
        // A narrow char after a wide one that didn't fit is still dropped
        assert_eq!(trim_to_width("a漢b", 2), "a");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("漢", 4), "漢  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_join_horizontal_top_aligned() {
        let joined = join_horizontal(&["ab\ncd\nef", "X\nYY"]);
        assert_eq!(joined, "abX \ncdYY\nef  ");
    }

    #[test]
    fn test_join_vertical_pads_lines() {
        let joined = join_vertical(&["abc", "d\nef"]);
        assert_eq!(joined, "abc\nd  \nef ");
    }

    #[test]
    fn test_join_nothing() {
        assert_eq!(join_horizontal::<&str>(&[]), "");
        assert_eq!(join_vertical::<&str>(&[]), "");
    }
}
