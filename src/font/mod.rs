// src/font/mod.rs

//! Embedded bitmap fonts and glyph lookup.
//!
//! Every glyph lives in an 8x8 cell at the 8px base size: rows 0-6 sit above
//! the baseline and row 7 holds descenders. Glyph lookup walks a fixed chain of
//! faces:
//!
//! 1. the special overlay, if one is merged in
//! 2. the table for the requested version, if that version is loaded
//! 3. the version's fallback face
//! 4. the missing-glyph box
//!
//! Misses never surface as errors.

mod fallback;
mod special;
mod tables;

pub use special::SpecialFont;

use crate::style::Style;
use log::trace;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tables::GlyphData;

/// Pixel size at which glyph metrics are authored.
pub const BASE_SIZE: f32 = 8.0;

/// Rows above the baseline in the 8px cell.
pub const ASCENT: u8 = 7;

/// Line advance in font pixels (8px cell plus one row of leading).
pub const LINE_HEIGHT: u8 = 9;

/// Extra advance bold glyphs take, in font pixels.
pub const BOLD_EXTRA_ADVANCE: u8 = 1;

/// Drawn for codepoints no face can resolve: a 5x7 outline.
pub const MISSING_GLYPH: GlyphRef = GlyphRef {
    advance: 6,
    rows: [
        0b11111000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b11111000,
        0b00000000,
    ],
};

/// Era of the game's default font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontVersion {
    #[default]
    Modern,
    Legacy,
}

impl FontVersion {
    fn face(self) -> &'static EmbeddedFace {
        match self {
            FontVersion::Modern => &MODERN_FACE,
            FontVersion::Legacy => &LEGACY_FACE,
        }
    }

    fn fallback_face(self) -> Option<&'static dyn GlyphSource> {
        match self {
            FontVersion::Modern => Some(fallback::composed_face()),
            FontVersion::Legacy => None,
        }
    }
}

/// Advance width and bitmap of one glyph.
///
/// `advance` is in font pixels at the base size and includes the 1px gap that
/// follows the glyph. `rows` holds the 8x8 bitmap, leftmost pixel in the most
/// significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRef {
    pub advance: u8,
    pub rows: [u8; 8],
}

impl GlyphRef {
    pub const fn new(advance: u8, rows: [u8; 8]) -> Self {
        Self { advance, rows }
    }

    /// Whether the font pixel at column `x`, row `y` is inked.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < 8 && y < 8 && self.rows[y as usize] & (0x80 >> x) != 0
    }

    /// True when no pixel is inked (spaces).
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }
}

impl GlyphData {
    fn glyph_ref(&self) -> GlyphRef {
        GlyphRef::new(self.advance, self.rows)
    }
}

/// A face the font system can consult for glyphs.
pub trait GlyphSource: Send + Sync + fmt::Debug {
    /// Human-readable face name, used in logs.
    fn name(&self) -> &'static str;

    /// The glyph for `c`, or `None` if the face does not cover it.
    fn lookup(&self, c: char) -> Option<GlyphRef>;
}

/// A face built from embedded glyph tables.
#[derive(Debug)]
pub(crate) struct EmbeddedFace {
    name: &'static str,
    glyphs: HashMap<char, GlyphRef>,
}

impl EmbeddedFace {
    fn from_tables(name: &'static str, tables: &[&[GlyphData]]) -> Self {
        let glyphs = tables
            .iter()
            .flat_map(|table| table.iter())
            .map(|data| (data.codepoint, data.glyph_ref()))
            .collect();
        Self { name, glyphs }
    }
}

impl GlyphSource for EmbeddedFace {
    fn name(&self) -> &'static str {
        self.name
    }

    fn lookup(&self, c: char) -> Option<GlyphRef> {
        self.glyphs.get(&c).copied()
    }
}

static MODERN_FACE: Lazy<EmbeddedFace> = Lazy::new(|| {
    EmbeddedFace::from_tables(
        "modern",
        &[&tables::ASCII_GLYPHS[..], &tables::MODERN_EXTRA_GLYPHS[..]],
    )
});

static LEGACY_FACE: Lazy<EmbeddedFace> =
    Lazy::new(|| EmbeddedFace::from_tables("legacy", &[&tables::ASCII_GLYPHS[..]]));

/// Candidates for obfuscated glyphs: printable non-whitespace ASCII, sorted.
static OBFUSCATION_CANDIDATES: Lazy<Vec<char>> = Lazy::new(|| {
    let mut candidates: Vec<char> = tables::ASCII_GLYPHS
        .iter()
        .map(|data| data.codepoint)
        .filter(|c| !c.is_whitespace())
        .collect();
    candidates.sort_unstable();
    candidates
});

/// Glyph metrics and bitmaps for one or more font versions.
///
/// All glyph data is static, so a `FontSystem` is cheap to clone and can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSystem {
    primary: FontVersion,
    loaded: Vec<FontVersion>,
    special: Option<SpecialFont>,
}

impl FontSystem {
    /// A font system whose primary (and only loaded) version is `version`.
    pub fn new(version: FontVersion) -> Self {
        Self {
            primary: version,
            loaded: vec![version],
            special: None,
        }
    }

    pub fn modern() -> Self {
        Self::new(FontVersion::Modern)
    }

    pub fn legacy() -> Self {
        Self::new(FontVersion::Legacy)
    }

    /// Additionally loads another version's table.
    pub fn with_version(mut self, version: FontVersion) -> Self {
        if !self.loaded.contains(&version) {
            self.loaded.push(version);
        }
        self
    }

    /// Merges a special overlay that shadows base glyphs it shares.
    pub fn with_special(mut self, special: SpecialFont) -> Self {
        self.special = Some(special);
        self
    }

    /// The version used by `measure` and by the layout engine.
    pub fn primary(&self) -> FontVersion {
        self.primary
    }

    pub fn special(&self) -> Option<SpecialFont> {
        self.special
    }

    pub fn is_loaded(&self, version: FontVersion) -> bool {
        self.loaded.contains(&version)
    }

    /// Resolves `c` through the overlay, the version table and the version's
    /// fallback face. Returns `None` where only the missing box would remain.
    pub fn try_glyph(&self, c: char, version: FontVersion) -> Option<GlyphRef> {
        self.resolve(c, version, self.special)
    }

    fn resolve(
        &self,
        c: char,
        version: FontVersion,
        special: Option<SpecialFont>,
    ) -> Option<GlyphRef> {
        if let Some(glyph) = special.and_then(|special| special.face().lookup(c)) {
            return Some(glyph);
        }
        if self.is_loaded(version) {
            if let Some(glyph) = version.face().lookup(c) {
                return Some(glyph);
            }
        }
        let fallback = version.fallback_face()?;
        let glyph = fallback.lookup(c);
        if glyph.is_some() {
            trace!(
                "glyph {:?} (U+{:04X}) resolved by fallback face {}",
                c,
                c as u32,
                fallback.name()
            );
        }
        glyph
    }

    /// The glyph drawn for `c`; the missing box when nothing covers it.
    pub fn glyph(&self, c: char, version: FontVersion) -> GlyphRef {
        self.glyph_with(c, version, self.special)
    }

    fn glyph_with(&self, c: char, version: FontVersion, special: Option<SpecialFont>) -> GlyphRef {
        self.resolve(c, version, special).unwrap_or_else(|| {
            trace!(
                "no glyph for {:?} (U+{:04X}) in {:?}, using missing box",
                c,
                c as u32,
                version
            );
            MISSING_GLYPH
        })
    }

    pub fn has_glyph(&self, c: char, version: FontVersion) -> bool {
        self.try_glyph(c, version).is_some()
    }

    /// Width of `text` at `size` pixels in the primary version.
    ///
    /// Operates on plain text: `§` codes are measured like any other glyph.
    /// Control characters measure zero.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        self.measure_styled(text, size, Style::empty())
    }

    /// As [`measure`](Self::measure), adding bold's extra pixel per glyph.
    pub fn measure_styled(&self, text: &str, size: f32, style: Style) -> f32 {
        self.measure_with(text, size, style, self.special)
    }

    /// Width of `text` drawn in the `special` overlay, whether or not it is
    /// merged in. Codepoints the overlay lacks measure as base glyphs.
    pub fn measure_special(&self, text: &str, size: f32, special: SpecialFont) -> f32 {
        self.measure_with(text, size, Style::empty(), Some(special))
    }

    fn measure_with(
        &self,
        text: &str,
        size: f32,
        style: Style,
        special: Option<SpecialFont>,
    ) -> f32 {
        let bold = if style.bold() { BOLD_EXTRA_ADVANCE } else { 0 };
        let units: u32 = text
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| u32::from(self.glyph_with(c, self.primary, special).advance + bold))
            .sum();
        units as f32 * size / BASE_SIZE
    }

    /// Fraction of the cell height above the baseline.
    pub fn ascent_ratio(&self) -> f32 {
        f32::from(ASCENT) / BASE_SIZE
    }

    /// Printable ASCII codepoints that draw with `advance` in the primary
    /// version, overlay included, sorted by codepoint.
    pub fn obfuscation_pool(&self, advance: u8) -> Vec<char> {
        OBFUSCATION_CANDIDATES
            .iter()
            .copied()
            .filter(|&c| self.glyph(c, self.primary).advance == advance)
            .collect()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::modern()
    }
}
