// src/font/special.rs

//! Special overlay fonts.
//!
//! Both overlays are runic alphabets keyed by latin letter: upper-case
//! letters share the lower-case glyphs.

use super::tables::{self, GlyphData};
use super::{EmbeddedFace, GlyphSource};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An overlay that replaces base glyphs for the codepoints it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialFont {
    /// The enchanting-table alphabet.
    Enchanting,
    /// The illager runes.
    Illager,
}

impl SpecialFont {
    pub fn name(self) -> &'static str {
        match self {
            SpecialFont::Enchanting => "enchanting",
            SpecialFont::Illager => "illager",
        }
    }

    pub(super) fn face(self) -> &'static dyn GlyphSource {
        match self {
            SpecialFont::Enchanting => &*ENCHANTING,
            SpecialFont::Illager => &*ILLAGER,
        }
    }
}

fn alphabet_face(name: &'static str, letters: &[GlyphData]) -> EmbeddedFace {
    let glyphs = letters
        .iter()
        .flat_map(|data| {
            let glyph = data.glyph_ref();
            [
                (data.codepoint, glyph),
                (data.codepoint.to_ascii_uppercase(), glyph),
            ]
        })
        .collect();
    EmbeddedFace { name, glyphs }
}

static ENCHANTING: Lazy<EmbeddedFace> =
    Lazy::new(|| alphabet_face("enchanting", &tables::ENCHANTING_GLYPHS[..]));

static ILLAGER: Lazy<EmbeddedFace> =
    Lazy::new(|| alphabet_face("illager", &tables::ILLAGER_GLYPHS[..]));
