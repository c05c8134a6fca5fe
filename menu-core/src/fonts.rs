use serde::{Deserialize, Serialize};

/// The standard PDF text faces. Every viewer ships these, so the
/// PDF emitter references them by name without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl BuiltinFont {
    /// All faces, in resource-name order.
    pub const ALL: [BuiltinFont; 12] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
        BuiltinFont::HelveticaBoldOblique,
        BuiltinFont::TimesRoman,
        BuiltinFont::TimesBold,
        BuiltinFont::TimesItalic,
        BuiltinFont::TimesBoldItalic,
        BuiltinFont::Courier,
        BuiltinFont::CourierBold,
        BuiltinFont::CourierOblique,
        BuiltinFont::CourierBoldOblique,
    ];

    /// Resource name used in content streams ("F1".."F12").
    pub fn resource_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::HelveticaOblique => "F3",
            BuiltinFont::HelveticaBoldOblique => "F4",
            BuiltinFont::TimesRoman => "F5",
            BuiltinFont::TimesBold => "F6",
            BuiltinFont::TimesItalic => "F7",
            BuiltinFont::TimesBoldItalic => "F8",
            BuiltinFont::Courier => "F9",
            BuiltinFont::CourierBold => "F10",
            BuiltinFont::CourierOblique => "F11",
            BuiltinFont::CourierBoldOblique => "F12",
        }
    }

    /// PostScript base name, e.g. "Times-Italic".
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::TimesBold => "Times-Bold",
            BuiltinFont::TimesItalic => "Times-Italic",
            BuiltinFont::TimesBoldItalic => "Times-BoldItalic",
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            BuiltinFont::HelveticaBold
                | BuiltinFont::HelveticaBoldOblique
                | BuiltinFont::TimesBold
                | BuiltinFont::TimesBoldItalic
                | BuiltinFont::CourierBold
                | BuiltinFont::CourierBoldOblique
        )
    }

    pub fn is_italic(&self) -> bool {
        matches!(
            self,
            BuiltinFont::HelveticaOblique
                | BuiltinFont::HelveticaBoldOblique
                | BuiltinFont::TimesItalic
                | BuiltinFont::TimesBoldItalic
                | BuiltinFont::CourierOblique
                | BuiltinFont::CourierBoldOblique
        )
    }
}

/// Theme font family, as chosen in the menu editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Serif,
    SansSerif,
    /// No script face among the standard fonts; rendered as Times
    /// italic throughout.
    Cursive,
    Monospace,
}

impl FontFamily {
    /// Pick the concrete face for a weight/slant combination.
    pub fn face(&self, bold: bool, italic: bool) -> BuiltinFont {
        let italic = italic || *self == FontFamily::Cursive;
        match (self, bold, italic) {
            (FontFamily::SansSerif, false, false) => BuiltinFont::Helvetica,
            (FontFamily::SansSerif, true, false) => BuiltinFont::HelveticaBold,
            (FontFamily::SansSerif, false, true) => BuiltinFont::HelveticaOblique,
            (FontFamily::SansSerif, true, true) => BuiltinFont::HelveticaBoldOblique,
            (FontFamily::Monospace, false, false) => BuiltinFont::Courier,
            (FontFamily::Monospace, true, false) => BuiltinFont::CourierBold,
            (FontFamily::Monospace, false, true) => BuiltinFont::CourierOblique,
            (FontFamily::Monospace, true, true) => BuiltinFont::CourierBoldOblique,
            (_, false, false) => BuiltinFont::TimesRoman,
            (_, true, false) => BuiltinFont::TimesBold,
            (_, false, true) => BuiltinFont::TimesItalic,
            (_, true, true) => BuiltinFont::TimesBoldItalic,
        }
    }
}

/// A face at a size in points. Layout lengths are inches; the
/// measurers do the conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: BuiltinFont,
    pub size: f64,
}

impl FontSpec {
    pub fn new(font: BuiltinFont, size: f64) -> Self {
        FontSpec { font, size }
    }
}

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

// Widths for ASCII 32..=126 in 1/1000 em, from the Adobe AFM files.

const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584,
    278, 333, 278, 278, 556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722,
    722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278,
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556,
    556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584,
    278, 333, 278, 278, 556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 333, 333, 584, 584, 584, 611, 975, 722, 722, 722,
    722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333,
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, 333, 611,
    611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564,
    250, 333, 250, 278, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 278, 278, 564, 564, 564, 444, 921, 722, 667, 667,
    722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333,
    278, 333, 469, 500, 333, 444, 500, 444, 500, 444, 333, 500,
    500, 278, 278, 500, 278, 778, 500, 500, 500, 500, 333, 389,
    278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570,
    250, 333, 250, 278, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 333, 333, 570, 570, 570, 500, 930, 722, 667, 722,
    722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333,
    278, 333, 581, 500, 333, 500, 556, 444, 556, 444, 333, 500,
    556, 278, 333, 556, 278, 833, 556, 500, 556, 556, 444, 389,
    333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675,
    250, 333, 250, 278, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 333, 333, 675, 675, 675, 500, 920, 611, 611, 667,
    722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389,
    278, 389, 422, 500, 333, 500, 500, 444, 500, 444, 278, 500,
    500, 278, 278, 444, 278, 722, 500, 500, 500, 500, 389, 389,
    278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

const TIMES_BOLD_ITALIC_WIDTHS: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570,
    250, 333, 250, 278, 500, 500, 500, 500, 500, 500, 500, 500,
    500, 500, 333, 333, 570, 570, 570, 500, 832, 667, 667, 667,
    722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333,
    278, 333, 570, 500, 333, 500, 500, 444, 500, 444, 333, 500,
    556, 278, 278, 500, 278, 778, 556, 500, 556, 556, 389, 389,
    278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

const COURIER_WIDTH: u16 = 600;

/// Fallback for characters with no table entry.
const DEFAULT_WIDTH: u16 = 500;

/// Map a Latin-1 accented letter to the ASCII letter whose width it
/// shares in the standard fonts. Spanish text is mostly these.
pub(crate) fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        '¿' => '?',
        '¡' => '!',
        _ => ch,
    }
}

/// WinAnsiEncoding byte for a character, `None` when the encoding
/// has no slot for it. Latin-1 maps to itself; the 0x80..=0x9F range
/// holds the typographic punctuation and the euro sign.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let code = ch as u32;
    if code < 0x80 || (0xA0..=0xFF).contains(&code) {
        return Some(code as u8);
    }
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// AFM widths for the WinAnsi punctuation most menus use, per face:
/// euro, single quotes, double quotes, en dash, em dash, bullet,
/// ellipsis, trademark.
fn punctuation_width(font: BuiltinFont, ch: char) -> Option<u16> {
    let widths: [u16; 8] = match font {
        BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => {
            [556, 222, 333, 556, 1000, 350, 1000, 1000]
        }
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
            [556, 278, 500, 556, 1000, 350, 1000, 1000]
        }
        BuiltinFont::TimesRoman => [500, 333, 444, 500, 1000, 350, 1000, 980],
        BuiltinFont::TimesBold => [500, 333, 500, 500, 1000, 350, 1000, 1000],
        BuiltinFont::TimesItalic => [500, 333, 556, 500, 889, 350, 889, 980],
        BuiltinFont::TimesBoldItalic => [500, 333, 500, 500, 1000, 350, 1000, 1000],
        BuiltinFont::Courier
        | BuiltinFont::CourierBold
        | BuiltinFont::CourierOblique
        | BuiltinFont::CourierBoldOblique => return Some(COURIER_WIDTH),
    };
    let slot = match ch {
        '€' => 0,
        '‘' | '’' | '‚' => 1,
        '“' | '”' | '„' => 2,
        '–' => 3,
        '—' => 4,
        '•' => 5,
        '…' => 6,
        '™' => 7,
        _ => return None,
    };
    Some(widths[slot])
}

/// Width of one character in 1/1000 em.
pub fn char_width(font: BuiltinFont, ch: char) -> u16 {
    let table = match font {
        BuiltinFont::Courier
        | BuiltinFont::CourierBold
        | BuiltinFont::CourierOblique
        | BuiltinFont::CourierBoldOblique => return COURIER_WIDTH,
        BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA_WIDTHS,
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
            &HELVETICA_BOLD_WIDTHS
        }
        BuiltinFont::TimesRoman => &TIMES_ROMAN_WIDTHS,
        BuiltinFont::TimesBold => &TIMES_BOLD_WIDTHS,
        BuiltinFont::TimesItalic => &TIMES_ITALIC_WIDTHS,
        BuiltinFont::TimesBoldItalic => &TIMES_BOLD_ITALIC_WIDTHS,
    };
    let code = fold_accent(ch) as u32;
    if (32..=126).contains(&code) {
        return table[(code - 32) as usize];
    }
    punctuation_width(font, ch).unwrap_or(DEFAULT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_letters_share_base_width() {
        assert_eq!(
            char_width(BuiltinFont::TimesRoman, 'ñ'),
            char_width(BuiltinFont::TimesRoman, 'n')
        );
        assert_eq!(
            char_width(BuiltinFont::HelveticaBold, 'É'),
            char_width(BuiltinFont::HelveticaBold, 'E')
        );
    }

    #[test]
    fn win_ansi_covers_euro_and_smart_quotes() {
        assert_eq!(win_ansi_code('€'), Some(0x80));
        assert_eq!(win_ansi_code('“'), Some(0x93));
        assert_eq!(win_ansi_code('—'), Some(0x97));
        assert_eq!(win_ansi_code('ñ'), Some(0xF1));
        assert_eq!(win_ansi_code('A'), Some(b'A'));
        assert_eq!(win_ansi_code('中'), None);
    }

    #[test]
    fn euro_uses_digit_width() {
        // The euro sign is as wide as a figure in every standard face.
        for font in BuiltinFont::ALL {
            assert_eq!(char_width(font, '€'), char_width(font, '0'));
        }
        assert_eq!(char_width(BuiltinFont::TimesItalic, '—'), 889);
        assert_eq!(char_width(BuiltinFont::Helvetica, '’'), 222);
    }

    #[test]
    fn courier_is_monospaced() {
        assert_eq!(char_width(BuiltinFont::Courier, 'i'), 600);
        assert_eq!(char_width(BuiltinFont::CourierBoldOblique, 'W'), 600);
    }

    #[test]
    fn family_faces() {
        assert_eq!(FontFamily::SansSerif.face(true, false), BuiltinFont::HelveticaBold);
        assert_eq!(FontFamily::Serif.face(false, true), BuiltinFont::TimesItalic);
        assert_eq!(FontFamily::Cursive.face(true, false), BuiltinFont::TimesBoldItalic);
        assert_eq!(FontFamily::Monospace.face(false, false), BuiltinFont::Courier);
    }

    #[test]
    fn resource_names_are_unique() {
        let mut names: Vec<&str> = BuiltinFont::ALL.iter().map(|f| f.resource_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), BuiltinFont::ALL.len());
    }
}
