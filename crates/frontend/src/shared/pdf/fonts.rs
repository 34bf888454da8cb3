//! WinAnsi encoding and glyph advance widths of the standard Helvetica faces
//! (1/1000 em). Characters WinAnsi cannot express are written as `?` and
//! measured as such.

use super::Font;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // ' ' ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Unicode code points of the WinAnsi slots 0x80..=0x9F; `None` marks the
/// undefined slots
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

#[rustfmt::skip]
const HELVETICA_HIGH: [u16; 32] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
];

#[rustfmt::skip]
const HELVETICA_BOLD_HIGH: [u16; 32] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
];

// 0xA0..=0xFF
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsi byte of `c`, if the encoding has it
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        32..=126 | 160..=255 => Some(code as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|slot| *slot == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

pub fn char_width(font: Font, c: char) -> u16 {
    let (ascii, high, latin1) = match font {
        Font::Helvetica => (&HELVETICA, &HELVETICA_HIGH, &HELVETICA_LATIN1),
        Font::HelveticaBold => (&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH, &HELVETICA_BOLD_LATIN1),
    };
    match win_ansi_byte(c).unwrap_or(b'?') {
        byte @ 32..=126 => ascii[(byte - 32) as usize],
        byte @ 0x80..=0x9F => high[(byte - 0x80) as usize],
        byte @ 0xA0..=0xFF => latin1[(byte - 0xA0) as usize],
        _ => ascii[(b'?' - 32) as usize],
    }
}

/// Width of `text` in em thousandths
pub fn text_units(font: Font, text: &str) -> u32 {
    text.chars().map(|c| char_width(font, c) as u32).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width(Font::Helvetica, ' '), 278);
        assert_eq!(char_width(Font::Helvetica, 'W'), 944);
        assert_eq!(char_width(Font::Helvetica, '~'), 584);
        assert_eq!(char_width(Font::HelveticaBold, 'b'), 611);
        assert_eq!(char_width(Font::Helvetica, 'é'), 556);
        assert_eq!(char_width(Font::HelveticaBold, 'Ä'), 722);
    }

    #[test]
    fn test_win_ansi_punctuation() {
        assert_eq!(win_ansi_byte('\u{2019}'), Some(0x92));
        assert_eq!(win_ansi_byte('\u{20AC}'), Some(0x80));
        assert_eq!(win_ansi_byte('\u{2013}'), Some(0x96));
        assert_eq!(win_ansi_byte('\u{2026}'), Some(0x85));
        assert_eq!(win_ansi_byte('A'), Some(b'A'));
        assert_eq!(win_ansi_byte('\u{65E5}'), None);
        assert_eq!(win_ansi_byte('\n'), None);

        assert_eq!(char_width(Font::Helvetica, '\u{2019}'), 222);
        assert_eq!(char_width(Font::Helvetica, '\u{2014}'), 1000);
        assert_eq!(char_width(Font::HelveticaBold, '\u{201C}'), 500);
        // unmapped characters are drawn as '?'
        assert_eq!(char_width(Font::Helvetica, '\u{65E5}'), 556);
        assert_eq!(char_width(Font::HelveticaBold, '\u{65E5}'), 611);
    }

    #[test]
    fn test_text_units() {
        assert_eq!(text_units(Font::Helvetica, "$0.00"), 556 * 4 + 278);
    }
}
