// src/font/fallback.rs

//! Fallback face for the modern font: accented lower-case latin letters
//! composed from a base letter and a diacritic mark.
//!
//! Lower-case letters occupy rows 2-6, which leaves rows 0-1 free for marks
//! above and row 7 for the cedilla.

use super::{tables, EmbeddedFace, GlyphRef, GlyphSource};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Grave,
    Acute,
    Circumflex,
    Diaeresis,
    Tilde,
    Ring,
    Cedilla,
}

impl Mark {
    /// Mark rows for a five-pixel-wide base: (row index, bits).
    fn wide(self) -> &'static [(usize, u8)] {
        match self {
            Mark::Grave => &[(0, 0b01000000), (1, 0b00100000)],
            Mark::Acute => &[(0, 0b00010000), (1, 0b00100000)],
            Mark::Circumflex => &[(0, 0b00100000), (1, 0b01010000)],
            Mark::Diaeresis => &[(0, 0b01010000)],
            Mark::Tilde => &[(0, 0b01101000), (1, 0b10110000)],
            Mark::Ring => &[(0, 0b01110000), (1, 0b01010000)],
            Mark::Cedilla => &[(7, 0b00100000)],
        }
    }

    /// Mark rows for the three-pixel-wide dotless i.
    fn narrow(self) -> &'static [(usize, u8)] {
        match self {
            Mark::Grave => &[(0, 0b10000000), (1, 0b01000000)],
            Mark::Acute => &[(0, 0b00100000), (1, 0b01000000)],
            Mark::Circumflex => &[(0, 0b01000000), (1, 0b10100000)],
            Mark::Diaeresis => &[(0, 0b10100000)],
            Mark::Tilde => &[(0, 0b01100000), (1, 0b11000000)],
            Mark::Ring => &[(0, 0b01000000), (1, 0b10100000)],
            Mark::Cedilla => &[(7, 0b01000000)],
        }
    }
}

const COMPOSITIONS: &[(char, char, Mark)] = &[
    ('à', 'a', Mark::Grave),
    ('á', 'a', Mark::Acute),
    ('â', 'a', Mark::Circumflex),
    ('ä', 'a', Mark::Diaeresis),
    ('ã', 'a', Mark::Tilde),
    ('å', 'a', Mark::Ring),
    ('è', 'e', Mark::Grave),
    ('é', 'e', Mark::Acute),
    ('ê', 'e', Mark::Circumflex),
    ('ë', 'e', Mark::Diaeresis),
    ('ì', 'i', Mark::Grave),
    ('í', 'i', Mark::Acute),
    ('î', 'i', Mark::Circumflex),
    ('ï', 'i', Mark::Diaeresis),
    ('ò', 'o', Mark::Grave),
    ('ó', 'o', Mark::Acute),
    ('ô', 'o', Mark::Circumflex),
    ('ö', 'o', Mark::Diaeresis),
    ('õ', 'o', Mark::Tilde),
    ('ù', 'u', Mark::Grave),
    ('ú', 'u', Mark::Acute),
    ('û', 'u', Mark::Circumflex),
    ('ü', 'u', Mark::Diaeresis),
    ('ý', 'y', Mark::Acute),
    ('ÿ', 'y', Mark::Diaeresis),
    ('ñ', 'n', Mark::Tilde),
    ('ç', 'c', Mark::Cedilla),
];

/// Stem of `i` without its dot, centered in a three-pixel cell.
const DOTLESS_I: GlyphRef = GlyphRef::new(
    4,
    [
        0b00000000, 0b00000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000,
        0b00000000,
    ],
);

fn compose(base: GlyphRef, mark: &[(usize, u8)]) -> GlyphRef {
    let mut glyph = base;
    for &(row, bits) in mark {
        glyph.rows[row] |= bits;
    }
    glyph
}

static COMPOSED: Lazy<EmbeddedFace> = Lazy::new(|| {
    let base: HashMap<char, GlyphRef> = tables::ASCII_GLYPHS
        .iter()
        .map(|data| (data.codepoint, data.glyph_ref()))
        .collect();

    let glyphs = COMPOSITIONS
        .iter()
        .filter_map(|&(composed, letter, mark)| {
            let glyph = if letter == 'i' {
                compose(DOTLESS_I, mark.narrow())
            } else {
                compose(*base.get(&letter)?, mark.wide())
            };
            Some((composed, glyph))
        })
        .collect();

    EmbeddedFace {
        name: "modern-composed",
        glyphs,
    }
});

pub(super) fn composed_face() -> &'static dyn GlyphSource {
    &*COMPOSED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_composition_resolves() {
        for &(composed, _, _) in COMPOSITIONS {
            assert!(composed_face().lookup(composed).is_some(), "{composed}");
        }
    }

    #[test]
    fn test_composed_keeps_base_advance_and_body() {
        let e = tables::ASCII_GLYPHS
            .iter()
            .find(|g| g.codepoint == 'e')
            .unwrap()
            .glyph_ref();
        let e_acute = composed_face().lookup('é').unwrap();
        assert_eq!(e_acute.advance, e.advance);
        assert_eq!(e_acute.rows[2..7], e.rows[2..7]);
        assert_ne!(e_acute.rows[0], 0);
    }

    #[test]
    fn test_cedilla_sits_below_baseline() {
        let c = composed_face().lookup('ç').unwrap();
        assert_eq!(c.rows[0], 0);
        assert_ne!(c.rows[7], 0);
    }

    #[test]
    fn test_dotless_i_marks_stay_inside_cell() {
        for c in ['ì', 'í', 'î', 'ï'] {
            let glyph = composed_face().lookup(c).unwrap();
            assert_eq!(glyph.advance, 4);
            assert!(glyph.rows.iter().all(|row| row & 0b00011111 == 0), "{c}");
        }
    }

    #[test]
    fn test_uncovered_codepoint_misses() {
        assert!(composed_face().lookup('a').is_none());
        assert!(composed_face().lookup('日').is_none());
    }
}
