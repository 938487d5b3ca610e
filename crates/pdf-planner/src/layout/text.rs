//! Text measurement and centering

use crate::constants::{HELVETICA_FALLBACK_WIDTH, HELVETICA_WIDTHS};
use crate::render::Surface;

/// Byte drawn in place of characters WinAnsiEncoding has no code for
pub const UNMAPPED_CHAR: u8 = b'?';

/// Code points of WinAnsiEncoding bytes 0x80..=0x9F; `None` marks unused codes
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// WinAnsiEncoding byte for `ch`, if the encoding has one.
fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|&mapped| mapped == Some(ch))
            .map(|index| 0x80 + index as u8),
    }
}

/// Encode `text` for the page font, one byte per character.
///
/// Characters outside WinAnsiEncoding become [`UNMAPPED_CHAR`].
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi_byte(ch).unwrap_or(UNMAPPED_CHAR))
        .collect()
}

/// Width of `text` set in Helvetica at `font_size` points.
///
/// Measures the glyphs that are actually drawn, after WinAnsi encoding.
pub fn helvetica_text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = encode_win_ansi(text)
        .into_iter()
        .map(|byte| {
            if (32..=126).contains(&byte) {
                HELVETICA_WIDTHS[(byte - 32) as usize] as u32
            } else {
                HELVETICA_FALLBACK_WIDTH as u32
            }
        })
        .sum();
    units as f32 * font_size / 1000.0
}

/// X position that centers `text` between `x_start` and `x_end`.
pub fn centered_text_x(
    surface: &dyn Surface,
    text: &str,
    font_size: f32,
    x_start: f32,
    x_end: f32,
) -> f32 {
    let length = surface.text_width(text, font_size);
    x_start + (x_end - x_start) / 2.0 - length / 2.0
}

/// Top-down baseline position that centers a line of `font_size` text
/// between `y_start` and `y_end`.
pub fn centered_baseline_y(font_size: f32, y_start: f32, y_end: f32) -> f32 {
    y_start + (y_end - y_start) / 2.0 + font_size / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_width() {
        // Every digit is 556 units wide
        assert!((helvetica_text_width("31", 10.0) - 11.12).abs() < 1e-4);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(helvetica_text_width("", 25.0), 0.0);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        let w = helvetica_text_width("é", 1000.0);
        assert_eq!(w, HELVETICA_FALLBACK_WIDTH as f32);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Año"), vec![b'A', 0xF1, b'o']);
        assert_eq!(encode_win_ansi("€5"), vec![0x80, b'5']);
        assert_eq!(encode_win_ansi("Jan–Feb"), b"Jan\x96Feb".to_vec());
    }

    #[test]
    fn test_unmapped_chars_are_substituted() {
        assert_eq!(encode_win_ansi("日記"), b"??".to_vec());
        // One glyph per character, however many UTF-8 bytes it takes
        assert_eq!(
            helvetica_text_width("日", 1000.0),
            helvetica_text_width("?", 1000.0)
        );
        assert_eq!(helvetica_text_width("ñ", 1000.0), HELVETICA_FALLBACK_WIDTH as f32);
    }

    #[test]
    fn test_centered_baseline() {
        assert_eq!(centered_baseline_y(10.0, 0.0, 100.0), 55.0);
    }
}
