// src/rasterizer.rs

//! Software rasterizer: draws laid-out glyphs into an RGBA buffer.
//!
//! Glyph bitmaps are scaled with an area-coverage (box filter) mask, so
//! fractional scales produce partially covered edge pixels instead of
//! dropped or doubled rows. Coverage times the glyph color is composited
//! with straight-alpha source-over. Pixels outside the buffer are clipped
//! and the buffer is never cleared by drawing.

use crate::error::{Error, Result};
use crate::font::{FontSystem, GlyphRef, ASCENT};
use crate::layout::{LayoutEngine, LayoutOptions, PositionedGlyph, TextLayout};
use crate::text::FormattedText;
use log::debug;

/// RGBA color in 32-bit format (8 bits per channel), straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to RGBA byte array
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgba::opaque(r, g, b)
    }
}

/// Straight-alpha source-over of `color` at opacity `alpha` onto `dst`.
fn blend_pixel(dst: &mut [u8], color: (u8, u8, u8), alpha: f32) {
    let sa = alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let src = [color.0, color.1, color.2];
    for (channel, &sc) in dst[..3].iter_mut().zip(&src) {
        let mixed = (f32::from(sc) * sa + f32::from(*channel) * da * (1.0 - sa)) / out_a;
        *channel = mixed.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Coverage accumulated over a rectangular pixel region.
#[derive(Debug)]
struct CoverageMask {
    left: i64,
    top: i64,
    width: usize,
    height: usize,
    coverage: Vec<f32>,
}

impl CoverageMask {
    fn new(left: i64, top: i64, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
            coverage: vec![0.0; width * height],
        }
    }

    /// Adds the exact area of the rectangle `[x0, x1) x [y0, y1)` overlapping
    /// each pixel, saturating at full coverage.
    fn add_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let px0 = (x0.floor() as i64).max(self.left);
        let px1 = (x1.ceil() as i64).min(self.left + self.width as i64);
        let py0 = (y0.floor() as i64).max(self.top);
        let py1 = (y1.ceil() as i64).min(self.top + self.height as i64);

        for py in py0..py1 {
            let cover_y = (y1.min(py as f32 + 1.0) - y0.max(py as f32)).max(0.0);
            if cover_y <= 0.0 {
                continue;
            }
            let row = (py - self.top) as usize * self.width;
            for px in px0..px1 {
                let cover_x = (x1.min(px as f32 + 1.0) - x0.max(px as f32)).max(0.0);
                let cell = &mut self.coverage[row + (px - self.left) as usize];
                *cell = (*cell + cover_x * cover_y).min(1.0);
            }
        }
    }
}

/// Builds the coverage mask for one placement.
fn glyph_mask(glyph: &GlyphRef, placement: &PositionedGlyph, scale: f32) -> CoverageMask {
    let ascent = f32::from(ASCENT);
    let top = placement.y - ascent * scale;
    let left = placement.x;

    // Bitmap or advance, whichever is wider, plus one column each for the bold
    // pass and the italic shear; eight rows plus the underline.
    let mask_left = left.floor() as i64;
    let mask_top = top.floor() as i64;
    let columns = f32::from(glyph.advance.max(8)) + 2.0;
    let mask_width = (columns * scale).ceil() as usize + 1;
    let mask_height = (9.0 * scale).ceil() as usize + 1;
    let mut mask = CoverageMask::new(mask_left, mask_top, mask_width, mask_height);

    let style = placement.style;
    let passes: &[f32] = if style.bold() { &[0.0, 1.0] } else { &[0.0] };

    for row in 0..8u8 {
        let shear = if style.italic() {
            (ascent - f32::from(row)) * scale / ascent
        } else {
            0.0
        };
        let y0 = top + f32::from(row) * scale;
        for col in 0..8u8 {
            if !glyph.is_set(col, row) {
                continue;
            }
            for &pass in passes {
                let x0 = left + (f32::from(col) + pass) * scale + shear;
                mask.add_rect(x0, y0, x0 + scale, y0 + scale);
            }
        }
    }

    let right = left + placement.advance;
    if style.underlined() {
        let y0 = top + 8.0 * scale;
        mask.add_rect(left, y0, right, y0 + scale);
    }
    if style.strikethrough() {
        let y0 = top + 3.5 * scale;
        mask.add_rect(left, y0, right, y0 + scale);
    }
    mask
}

/// The pixels of a finished render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub width: u32,
    pub height: u32,
    /// RGBA, row-major, straight alpha.
    pub data: Vec<u8>,
}

impl RenderResult {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.data.get(idx..idx + 4)?;
        Some(Rgba::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }
}

/// Owns an RGBA buffer and draws layouts into it.
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

impl SoftwareRenderer {
    /// A renderer over a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            buffer: vec![0; buffer_len(width, height)],
        })
    }

    /// A renderer over a caller-supplied buffer, e.g. a pre-painted background.
    pub fn from_buffer(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = buffer_len(width, height);
        if buffer.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    /// Draws every placement of `layout`, offset by the origin, in paint order.
    pub fn draw_layout(
        &mut self,
        fonts: &FontSystem,
        layout: &TextLayout,
        origin_x: f32,
        origin_y: f32,
    ) {
        let version = fonts.primary();
        for placement in &layout.glyphs {
            let glyph = fonts.glyph(placement.codepoint, version);
            let shifted = PositionedGlyph {
                x: placement.x + origin_x,
                y: placement.y + origin_y,
                ..*placement
            };
            let mask = glyph_mask(&glyph, &shifted, layout.scale);
            self.composite(&mask, placement.color);
        }
    }

    /// Lays out `text` and draws it with its top-left corner at `(x, y)`.
    pub fn render_text(
        &mut self,
        fonts: &FontSystem,
        text: &FormattedText,
        x: f32,
        y: f32,
        options: &LayoutOptions,
    ) -> TextLayout {
        let layout = LayoutEngine::new(fonts).layout(text, options);
        self.draw_layout(fonts, &layout, x, y);
        layout
    }

    pub fn into_result(self) -> RenderResult {
        RenderResult {
            width: self.width,
            height: self.height,
            data: self.buffer,
        }
    }

    fn composite(&mut self, mask: &CoverageMask, color: (u8, u8, u8)) {
        let width = i64::from(self.width);
        let height = i64::from(self.height);
        for my in 0..mask.height {
            let y = mask.top + my as i64;
            if y < 0 || y >= height {
                continue;
            }
            for mx in 0..mask.width {
                let x = mask.left + mx as i64;
                if x < 0 || x >= width {
                    continue;
                }
                let coverage = mask.coverage[my * mask.width + mx];
                if coverage <= 0.0 {
                    continue;
                }
                let idx = (y as usize * self.width as usize + x as usize) * 4;
                blend_pixel(&mut self.buffer[idx..idx + 4], color, coverage);
            }
        }
    }
}

/// Renders `text` into a fresh transparent `width` x `height` buffer.
pub fn render(
    fonts: &FontSystem,
    text: &FormattedText,
    width: u32,
    height: u32,
    options: &LayoutOptions,
) -> Result<RenderResult> {
    let mut renderer = SoftwareRenderer::new(width, height)?;
    let layout = renderer.render_text(fonts, text, 0.0, 0.0, options);
    debug!(
        "render: {} placements into {}x{} buffer",
        layout.glyphs.len(),
        width,
        height
    );
    Ok(renderer.into_result())
}
