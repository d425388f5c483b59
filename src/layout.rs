// src/layout.rs

//! Layout: turns formatted text into positioned glyphs.
//!
//! The engine walks spans in order, resolving each character against the
//! font system and advancing a cursor. Lines break on `\n` and, when a
//! maximum width is set, before the character that would overflow it.
//! Output placements are in paint order: every shadow first, then every
//! primary glyph.

use crate::color::{shadow_color, NamedColor};
use crate::font::{FontSystem, ASCENT, BASE_SIZE, BOLD_EXTRA_ADVANCE, LINE_HEIGHT};
use crate::style::Style;
use crate::text::FormattedText;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Offset of shadow placements from their glyph, in output pixels.
pub const SHADOW_OFFSET: f32 = 1.0;

/// Horizontal alignment of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Options controlling a single layout call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Pixel size; the 8px base cell is scaled by `size / 8`.
    pub size: f32,
    pub max_width: Option<f32>,
    pub shadow: bool,
    pub align: TextAlign,
    /// Extra pixels between lines.
    pub line_spacing: f32,
    /// Seed for obfuscated glyph substitution.
    pub obfuscation_seed: u64,
}

impl LayoutOptions {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            max_width: None,
            shadow: false,
            align: TextAlign::Left,
            line_spacing: 0.0,
            obfuscation_seed: 0,
        }
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.obfuscation_seed = seed;
        self
    }

    /// Output pixels per font pixel.
    pub fn scale(&self) -> f32 {
        self.size / BASE_SIZE
    }

    pub fn line_height(&self) -> f32 {
        f32::from(LINE_HEIGHT) * self.scale() + self.line_spacing
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(BASE_SIZE * 2.0)
    }
}

/// One glyph placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Codepoint to draw; differs from `source` for obfuscated glyphs.
    pub codepoint: char,
    /// Codepoint from the input text.
    pub source: char,
    /// Left edge of the glyph cell, in pixels.
    pub x: f32,
    /// Baseline of the glyph's line, in pixels.
    pub y: f32,
    /// Scaled advance, including bold's extra pixel.
    pub advance: f32,
    pub color: (u8, u8, u8),
    pub style: Style,
    pub shadow: bool,
}

/// Result of laying out a text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    /// Placements in paint order.
    pub glyphs: Vec<PositionedGlyph>,
    /// Widest line, in pixels.
    pub width: f32,
    pub height: f32,
    pub lines: usize,
    pub scale: f32,
}

impl TextLayout {
    /// Placements of the primary (non-shadow) glyphs.
    pub fn primary_glyphs(&self) -> impl Iterator<Item = &PositionedGlyph> {
        self.glyphs.iter().filter(|g| !g.shadow)
    }

    pub fn shadow_glyphs(&self) -> impl Iterator<Item = &PositionedGlyph> {
        self.glyphs.iter().filter(|g| g.shadow)
    }
}

/// A glyph on a line being built, before its x position is known.
#[derive(Debug, Clone, Copy)]
struct Pending {
    codepoint: char,
    source: char,
    advance: f32,
    color: (u8, u8, u8),
    style: Style,
}

impl Pending {
    fn is_whitespace(&self) -> bool {
        self.source.is_whitespace()
    }
}

#[derive(Debug, Default)]
struct Line {
    glyphs: Vec<Pending>,
}

impl Line {
    fn width(&self) -> f32 {
        self.glyphs.iter().map(|g| g.advance).sum()
    }

    fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    fn trim_trailing_whitespace(&mut self) {
        while self.glyphs.last().is_some_and(Pending::is_whitespace) {
            self.glyphs.pop();
        }
    }

    /// Splits at the last whitespace glyph: the glyphs after it are returned
    /// and the whitespace itself is dropped.
    fn split_at_last_whitespace(&mut self) -> Option<Line> {
        let idx = self.glyphs.iter().rposition(Pending::is_whitespace)?;
        let tail = self.glyphs.split_off(idx + 1);
        self.trim_trailing_whitespace();
        Some(Line { glyphs: tail })
    }
}

/// Lays out text against a font system.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    fonts: &'a FontSystem,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(fonts: &'a FontSystem) -> Self {
        Self { fonts }
    }

    pub fn layout(&self, text: &FormattedText, options: &LayoutOptions) -> TextLayout {
        let scale = options.scale();
        if !(options.size.is_finite() && options.size > 0.0) {
            warn!("layout: invalid size {}, producing an empty layout", options.size);
            return TextLayout {
                scale,
                ..TextLayout::default()
            };
        }

        let lines = self.break_lines(text, options);
        let line_height = options.line_height();
        let width = lines.iter().map(Line::width).fold(0.0, f32::max);
        let container = options.max_width.unwrap_or(width);

        let mut primaries = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let line_width = line.width();
            let mut x = match options.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => ((container - line_width) / 2.0).max(0.0),
                TextAlign::Right => (container - line_width).max(0.0),
            };
            let y = index as f32 * line_height + f32::from(ASCENT) * scale;
            for glyph in &line.glyphs {
                primaries.push(PositionedGlyph {
                    codepoint: glyph.codepoint,
                    source: glyph.source,
                    x,
                    y,
                    advance: glyph.advance,
                    color: glyph.color,
                    style: glyph.style,
                    shadow: false,
                });
                x += glyph.advance;
            }
        }

        let mut glyphs = Vec::with_capacity(primaries.len() * 2);
        if options.shadow {
            glyphs.extend(primaries.iter().map(|g| PositionedGlyph {
                x: g.x + SHADOW_OFFSET,
                y: g.y + SHADOW_OFFSET,
                color: shadow_color(g.color),
                shadow: true,
                ..*g
            }));
        }
        glyphs.extend(primaries);

        let layout = TextLayout {
            glyphs,
            width,
            height: lines.len() as f32 * line_height,
            lines: lines.len(),
            scale,
        };
        debug!(
            "layout: {} placements on {} lines, {}x{} px",
            layout.glyphs.len(),
            layout.lines,
            layout.width,
            layout.height
        );
        layout
    }

    fn break_lines(&self, text: &FormattedText, options: &LayoutOptions) -> Vec<Line> {
        let version = self.fonts.primary();
        let scale = options.scale();
        let mut rng = StdRng::seed_from_u64(options.obfuscation_seed);
        let mut pools: BTreeMap<u8, Vec<char>> = BTreeMap::new();

        let mut lines = Vec::new();
        let mut line = Line::default();
        let mut started = false;
        // Set by a soft break; whitespace may not open the next line.
        let mut wrapped = false;

        for span in text.spans() {
            let color = span
                .color
                .map(|c| c.rgb())
                .unwrap_or_else(|| NamedColor::White.rgb());
            let bold = if span.style.bold() { BOLD_EXTRA_ADVANCE } else { 0 };

            for c in span.text.chars() {
                if c == '\n' {
                    lines.push(std::mem::take(&mut line));
                    started = true;
                    wrapped = false;
                    continue;
                }
                if c.is_control() {
                    continue;
                }
                started = true;

                let glyph = self.fonts.glyph(c, version);
                let advance = f32::from(glyph.advance + bold) * scale;

                let mut codepoint = c;
                if span.style.obfuscated() && !c.is_whitespace() {
                    let pool = pools
                        .entry(glyph.advance)
                        .or_insert_with(|| self.fonts.obfuscation_pool(glyph.advance));
                    if !pool.is_empty() {
                        codepoint = pool[rng.gen_range(0..pool.len())];
                    }
                }

                if let Some(max_width) = options.max_width {
                    if wrapped && line.is_empty() && c.is_whitespace() {
                        continue;
                    }
                    if !line.is_empty() && line.width() + advance > max_width {
                        wrapped = true;
                        if c.is_whitespace() {
                            line.trim_trailing_whitespace();
                            lines.push(std::mem::take(&mut line));
                            continue;
                        }
                        match line.split_at_last_whitespace() {
                            Some(tail) => {
                                // Only whitespace preceded the tail: nothing to break off.
                                let head = std::mem::replace(&mut line, tail);
                                if !head.is_empty() {
                                    lines.push(head);
                                }
                                if !line.is_empty() && line.width() + advance > max_width {
                                    lines.push(std::mem::take(&mut line));
                                }
                            }
                            None => lines.push(std::mem::take(&mut line)),
                        }
                    }
                    if line.is_empty() && advance > max_width {
                        warn!(
                            "layout: glyph {:?} ({} px) is wider than max width {} px",
                            c, advance, max_width
                        );
                    }
                }

                line.glyphs.push(Pending {
                    codepoint,
                    source: c,
                    advance,
                    color,
                    style: span.style,
                });
            }
        }

        if started {
            lines.push(line);
        }
        lines
    }
}
