//! SGR escape sequences in card art, turned into ratatui styles so the
//! escapes themselves never reach the buffer as text.

use ratatui::style::{Color, Modifier, Style};

use crate::layout::{is_escape, segments};

/// A printable piece of a line with the style its escapes set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment<'a> {
    pub text: &'a str,
    pub width: usize,
    pub style: Style,
}

/// Printable segments of `line` with escapes folded into their style.
///
/// Only SGR sequences (`ESC [ ... m`) change the style, other escapes are
/// dropped.
pub fn styled_segments(line: &str) -> Vec<StyledSegment<'_>> {
    let mut style = Style::default();
    let mut out = Vec::new();
    for (text, width) in segments(line) {
        if is_escape(text) {
            if let Some(params) = text
                .strip_prefix("\u{1b}[")
                .and_then(|rest| rest.strip_suffix('m'))
            {
                style = apply_sgr(style, params);
            }
            continue;
        }
        out.push(StyledSegment { text, width, style });
    }
    out
}

fn apply_sgr(mut style: Style, params: &str) -> Style {
    let codes: Vec<u16> = params
        .split(';')
        .map(|code| code.parse().unwrap_or(0))
        .collect();

    let mut i = 0;
    while i < codes.len() {
        match codes[i] {
            0 => style = Style::default(),
            1 => style = style.add_modifier(Modifier::BOLD),
            2 => style = style.add_modifier(Modifier::DIM),
            3 => style = style.add_modifier(Modifier::ITALIC),
            4 => style = style.add_modifier(Modifier::UNDERLINED),
            7 => style = style.add_modifier(Modifier::REVERSED),
            22 => style = style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style = style.remove_modifier(Modifier::ITALIC),
            24 => style = style.remove_modifier(Modifier::UNDERLINED),
            27 => style = style.remove_modifier(Modifier::REVERSED),
            code @ 30..=37 => style.fg = Some(Color::Indexed((code - 30) as u8)),
            code @ 90..=97 => style.fg = Some(Color::Indexed((code - 90 + 8) as u8)),
            code @ 40..=47 => style.bg = Some(Color::Indexed((code - 40) as u8)),
            code @ 100..=107 => style.bg = Some(Color::Indexed((code - 100 + 8) as u8)),
            39 => style.fg = None,
            49 => style.bg = None,
            code @ (38 | 48) => {
                let (color, used) = extended_color(&codes[i + 1..]);
                if let Some(color) = color {
                    if code == 38 {
                        style.fg = Some(color);
                    } else {
                        style.bg = Some(color);
                    }
                }
                i += used;
            }
            _ => {}
        }
        i += 1;
    }
    style
}

/// `5;n` or `2;r;g;b` after a 38/48, with the number of codes consumed
fn extended_color(codes: &[u16]) -> (Option<Color>, usize) {
    let byte = |i: usize| codes.get(i).and_then(|&c| u8::try_from(c).ok());
    match codes.first() {
        Some(5) => (byte(1).map(Color::Indexed), 2),
        Some(2) => match (byte(1), byte(2), byte(3)) {
            (Some(r), Some(g), Some(b)) => (Some(Color::Rgb(r, g, b)), 4),
            _ => (None, codes.len()),
        },
        _ => (None, codes.len()),
    }
}
