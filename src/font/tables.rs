// src/font/tables.rs

//! Embedded bitmap glyph data.
//!
//! Each row is one byte with the leftmost pixel in the most significant bit.
//! Row 7 is the descender row; the baseline sits below row 6. Advances are in
//! font pixels and include the one-pixel gap after the glyph.

/// One embedded glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct GlyphData {
    pub(super) codepoint: char,
    pub(super) advance: u8,
    pub(super) rows: [u8; 8],
}

const fn glyph(codepoint: char, advance: u8, rows: [u8; 8]) -> GlyphData {
    GlyphData {
        codepoint,
        advance,
        rows,
    }
}

/// Printable ASCII, shared by every font version.
pub(super) static ASCII_GLYPHS: [GlyphData; 95] = [
    glyph(' ', 4, [
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('!', 2, [
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('"', 4, [
        0b10100000,
        0b10100000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('#', 6, [
        0b01010000,
        0b01010000,
        0b11111000,
        0b01010000,
        0b11111000,
        0b01010000,
        0b01010000,
        0b00000000,
    ]),
    glyph('$', 6, [
        0b00100000,
        0b01111000,
        0b10000000,
        0b01110000,
        0b00001000,
        0b11110000,
        0b00100000,
        0b00000000,
    ]),
    glyph('%', 6, [
        0b10001000,
        0b00001000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b10000000,
        0b10001000,
        0b00000000,
    ]),
    glyph('&', 6, [
        0b00100000,
        0b01010000,
        0b00100000,
        0b01101000,
        0b10010000,
        0b10010000,
        0b01101000,
        0b00000000,
    ]),
    glyph('\'', 2, [
        0b10000000,
        0b10000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('(', 5, [
        0b00110000,
        0b01000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b01000000,
        0b00110000,
        0b00000000,
    ]),
    glyph(')', 5, [
        0b11000000,
        0b00100000,
        0b00010000,
        0b00010000,
        0b00010000,
        0b00100000,
        0b11000000,
        0b00000000,
    ]),
    glyph('*', 5, [
        0b00000000,
        0b00000000,
        0b10010000,
        0b01100000,
        0b10010000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('+', 6, [
        0b00000000,
        0b00100000,
        0b00100000,
        0b11111000,
        0b00100000,
        0b00100000,
        0b00000000,
        0b00000000,
    ]),
    glyph(',', 2, [
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b10000000,
        0b10000000,
        0b10000000,
    ]),
    glyph('-', 6, [
        0b00000000,
        0b00000000,
        0b00000000,
        0b11111000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('.', 2, [
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('/', 6, [
        0b00001000,
        0b00010000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b01000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('0', 6, [
        0b01110000,
        0b10001000,
        0b10011000,
        0b10101000,
        0b11001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('1', 6, [
        0b00100000,
        0b01100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b11111000,
        0b00000000,
    ]),
    glyph('2', 6, [
        0b01110000,
        0b10001000,
        0b00001000,
        0b00110000,
        0b01000000,
        0b10001000,
        0b11111000,
        0b00000000,
    ]),
    glyph('3', 6, [
        0b01110000,
        0b10001000,
        0b00001000,
        0b00110000,
        0b00001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('4', 6, [
        0b00011000,
        0b00101000,
        0b01001000,
        0b10001000,
        0b11111000,
        0b00001000,
        0b00001000,
        0b00000000,
    ]),
    glyph('5', 6, [
        0b11111000,
        0b10000000,
        0b11110000,
        0b00001000,
        0b00001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('6', 6, [
        0b00110000,
        0b01000000,
        0b10000000,
        0b11110000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('7', 6, [
        0b11111000,
        0b10001000,
        0b00001000,
        0b00010000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00000000,
    ]),
    glyph('8', 6, [
        0b01110000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('9', 6, [
        0b01110000,
        0b10001000,
        0b10001000,
        0b01111000,
        0b00001000,
        0b00010000,
        0b01100000,
        0b00000000,
    ]),
    glyph(':', 2, [
        0b00000000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b00000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph(';', 2, [
        0b00000000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b00000000,
        0b10000000,
        0b10000000,
        0b10000000,
    ]),
    glyph('<', 5, [
        0b00010000,
        0b00100000,
        0b01000000,
        0b10000000,
        0b01000000,
        0b00100000,
        0b00010000,
        0b00000000,
    ]),
    glyph('=', 6, [
        0b00000000,
        0b00000000,
        0b11111000,
        0b00000000,
        0b00000000,
        0b11111000,
        0b00000000,
        0b00000000,
    ]),
    glyph('>', 5, [
        0b10000000,
        0b01000000,
        0b00100000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('?', 6, [
        0b01110000,
        0b10001000,
        0b00001000,
        0b00010000,
        0b00100000,
        0b00000000,
        0b00100000,
        0b00000000,
    ]),
    glyph('@', 7, [
        0b01111000,
        0b10000100,
        0b10110100,
        0b10110100,
        0b10111100,
        0b10000000,
        0b01111000,
        0b00000000,
    ]),
    glyph('A', 6, [
        0b01110000,
        0b10001000,
        0b10001000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('B', 6, [
        0b11110000,
        0b10001000,
        0b11110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b11110000,
        0b00000000,
    ]),
    glyph('C', 6, [
        0b01110000,
        0b10001000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('D', 6, [
        0b11110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b11110000,
        0b00000000,
    ]),
    glyph('E', 6, [
        0b11111000,
        0b10000000,
        0b11100000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b11111000,
        0b00000000,
    ]),
    glyph('F', 6, [
        0b11111000,
        0b10000000,
        0b11100000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('G', 6, [
        0b01111000,
        0b10000000,
        0b10011000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('H', 6, [
        0b10001000,
        0b10001000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('I', 4, [
        0b11100000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b11100000,
        0b00000000,
    ]),
    glyph('J', 6, [
        0b00001000,
        0b00001000,
        0b00001000,
        0b00001000,
        0b00001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('K', 6, [
        0b10001000,
        0b10010000,
        0b11100000,
        0b10010000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('L', 6, [
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b11111000,
        0b00000000,
    ]),
    glyph('M', 6, [
        0b10001000,
        0b11011000,
        0b10101000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('N', 6, [
        0b10001000,
        0b11001000,
        0b10101000,
        0b10011000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('O', 6, [
        0b01110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('P', 6, [
        0b11110000,
        0b10001000,
        0b11110000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('Q', 6, [
        0b01110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10010000,
        0b01101000,
        0b00000000,
    ]),
    glyph('R', 6, [
        0b11110000,
        0b10001000,
        0b11110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('S', 6, [
        0b01111000,
        0b10000000,
        0b01110000,
        0b00001000,
        0b00001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('T', 6, [
        0b11111000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00000000,
    ]),
    glyph('U', 6, [
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('V', 6, [
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01010000,
        0b01010000,
        0b00100000,
        0b00000000,
    ]),
    glyph('W', 6, [
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10101000,
        0b11011000,
        0b10001000,
        0b00000000,
    ]),
    glyph('X', 6, [
        0b10001000,
        0b01010000,
        0b00100000,
        0b01010000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('Y', 6, [
        0b10001000,
        0b01010000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00000000,
    ]),
    glyph('Z', 6, [
        0b11111000,
        0b00001000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b10000000,
        0b11111000,
        0b00000000,
    ]),
    glyph('[', 4, [
        0b11100000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b11100000,
        0b00000000,
    ]),
    glyph('\\', 6, [
        0b10000000,
        0b01000000,
        0b01000000,
        0b00100000,
        0b00010000,
        0b00010000,
        0b00001000,
        0b00000000,
    ]),
    glyph(']', 4, [
        0b11100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b11100000,
        0b00000000,
    ]),
    glyph('^', 6, [
        0b00100000,
        0b01010000,
        0b10001000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('_', 6, [
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b11111000,
    ]),
    glyph('`', 3, [
        0b10000000,
        0b01000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('a', 6, [
        0b00000000,
        0b00000000,
        0b01110000,
        0b00001000,
        0b01111000,
        0b10001000,
        0b01111000,
        0b00000000,
    ]),
    glyph('b', 6, [
        0b10000000,
        0b10000000,
        0b10110000,
        0b11001000,
        0b10001000,
        0b10001000,
        0b11110000,
        0b00000000,
    ]),
    glyph('c', 6, [
        0b00000000,
        0b00000000,
        0b01110000,
        0b10001000,
        0b10000000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('d', 6, [
        0b00001000,
        0b00001000,
        0b01101000,
        0b10011000,
        0b10001000,
        0b10001000,
        0b01111000,
        0b00000000,
    ]),
    glyph('e', 6, [
        0b00000000,
        0b00000000,
        0b01110000,
        0b10001000,
        0b11111000,
        0b10000000,
        0b01111000,
        0b00000000,
    ]),
    glyph('f', 5, [
        0b00110000,
        0b01000000,
        0b11110000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b00000000,
    ]),
    glyph('g', 6, [
        0b00000000,
        0b00000000,
        0b01111000,
        0b10001000,
        0b10001000,
        0b01111000,
        0b00001000,
        0b11110000,
    ]),
    glyph('h', 6, [
        0b10000000,
        0b10000000,
        0b10110000,
        0b11001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('i', 2, [
        0b10000000,
        0b00000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('j', 6, [
        0b00001000,
        0b00000000,
        0b00001000,
        0b00001000,
        0b00001000,
        0b00001000,
        0b10001000,
        0b01110000,
    ]),
    glyph('k', 5, [
        0b10000000,
        0b10000000,
        0b10010000,
        0b10100000,
        0b11000000,
        0b10100000,
        0b10010000,
        0b00000000,
    ]),
    glyph('l', 3, [
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b01000000,
        0b00000000,
    ]),
    glyph('m', 6, [
        0b00000000,
        0b00000000,
        0b11010000,
        0b10101000,
        0b10101000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('n', 6, [
        0b00000000,
        0b00000000,
        0b11110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('o', 6, [
        0b00000000,
        0b00000000,
        0b01110000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('p', 6, [
        0b00000000,
        0b00000000,
        0b10110000,
        0b11001000,
        0b10001000,
        0b11110000,
        0b10000000,
        0b10000000,
    ]),
    glyph('q', 6, [
        0b00000000,
        0b00000000,
        0b01101000,
        0b10011000,
        0b10001000,
        0b01111000,
        0b00001000,
        0b00001000,
    ]),
    glyph('r', 6, [
        0b00000000,
        0b00000000,
        0b10110000,
        0b11001000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('s', 6, [
        0b00000000,
        0b00000000,
        0b01111000,
        0b10000000,
        0b01110000,
        0b00001000,
        0b11110000,
        0b00000000,
    ]),
    glyph('t', 4, [
        0b01000000,
        0b01000000,
        0b11100000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b00100000,
        0b00000000,
    ]),
    glyph('u', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01111000,
        0b00000000,
    ]),
    glyph('v', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01010000,
        0b00100000,
        0b00000000,
    ]),
    glyph('w', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b10001000,
        0b10101000,
        0b10101000,
        0b01111000,
        0b00000000,
    ]),
    glyph('x', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b01010000,
        0b00100000,
        0b01010000,
        0b10001000,
        0b00000000,
    ]),
    glyph('y', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b01111000,
        0b00001000,
        0b11110000,
    ]),
    glyph('z', 6, [
        0b00000000,
        0b00000000,
        0b11111000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b11111000,
        0b00000000,
    ]),
    glyph('{', 5, [
        0b00110000,
        0b01000000,
        0b01000000,
        0b10000000,
        0b01000000,
        0b01000000,
        0b00110000,
        0b00000000,
    ]),
    glyph('|', 2, [
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
    ]),
    glyph('}', 5, [
        0b11000000,
        0b00100000,
        0b00100000,
        0b00010000,
        0b00100000,
        0b00100000,
        0b11000000,
        0b00000000,
    ]),
    glyph('~', 7, [
        0b01100100,
        0b10011000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
];

/// Symbols only the modern font carries.
pub(super) static MODERN_EXTRA_GLYPHS: [GlyphData; 8] = [
    glyph('§', 5, [
        0b01110000,
        0b10000000,
        0b01100000,
        0b10010000,
        0b01100000,
        0b00010000,
        0b11100000,
        0b00000000,
    ]),
    glyph('°', 5, [
        0b01100000,
        0b10010000,
        0b01100000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('•', 3, [
        0b00000000,
        0b00000000,
        0b11000000,
        0b11000000,
        0b00000000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('×', 6, [
        0b00000000,
        0b10001000,
        0b01010000,
        0b00100000,
        0b01010000,
        0b10001000,
        0b00000000,
        0b00000000,
    ]),
    glyph('÷', 6, [
        0b00000000,
        0b00100000,
        0b00000000,
        0b11111000,
        0b00000000,
        0b00100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('←', 8, [
        0b00000000,
        0b00100000,
        0b01000000,
        0b11111110,
        0b01000000,
        0b00100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('→', 8, [
        0b00000000,
        0b00001000,
        0b00000100,
        0b11111110,
        0b00000100,
        0b00001000,
        0b00000000,
        0b00000000,
    ]),
    glyph('♥', 8, [
        0b01101100,
        0b11111110,
        0b11111110,
        0b01111100,
        0b00111000,
        0b00010000,
        0b00000000,
        0b00000000,
    ]),
];

/// The enchanting-table alphabet, indexed by lower-case latin letter.
pub(super) static ENCHANTING_GLYPHS: [GlyphData; 26] = [
    glyph('a', 6, [
        0b00000000,
        0b00000000,
        0b11111000,
        0b10100000,
        0b10100000,
        0b00111000,
        0b00000000,
        0b00000000,
    ]),
    glyph('b', 6, [
        0b00000000,
        0b10000000,
        0b10000000,
        0b10110000,
        0b10010000,
        0b01110000,
        0b00000000,
        0b00000000,
    ]),
    glyph('c', 6, [
        0b00000000,
        0b00000000,
        0b00100000,
        0b01110000,
        0b10101000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('d', 6, [
        0b00000000,
        0b11111000,
        0b01001000,
        0b10001000,
        0b01000000,
        0b01000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('e', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b10001000,
        0b11111000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('f', 6, [
        0b00000000,
        0b11111000,
        0b00000000,
        0b11111000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('g', 6, [
        0b00000000,
        0b00001000,
        0b00001000,
        0b11111000,
        0b00001000,
        0b00001000,
        0b00000000,
        0b00000000,
    ]),
    glyph('h', 6, [
        0b00000000,
        0b00100000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('i', 2, [
        0b00000000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('j', 2, [
        0b00000000,
        0b10000000,
        0b00000000,
        0b10000000,
        0b00000000,
        0b10000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('k', 6, [
        0b00000000,
        0b11111000,
        0b10101000,
        0b10101000,
        0b00100000,
        0b00100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('l', 6, [
        0b00000000,
        0b11111000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('m', 6, [
        0b00000000,
        0b00000000,
        0b10001000,
        0b10001000,
        0b11111000,
        0b00100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('n', 6, [
        0b00000000,
        0b10100000,
        0b10100000,
        0b00100000,
        0b00100000,
        0b01100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('o', 6, [
        0b00000000,
        0b11111000,
        0b00001000,
        0b11111000,
        0b10000000,
        0b11111000,
        0b00000000,
        0b00000000,
    ]),
    glyph('p', 4, [
        0b00000000,
        0b10100000,
        0b10000000,
        0b10100000,
        0b00100000,
        0b10100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('q', 6, [
        0b00000000,
        0b00000000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
        0b00000000,
    ]),
    glyph('r', 6, [
        0b00000000,
        0b00000000,
        0b10100000,
        0b00000000,
        0b10100000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('s', 6, [
        0b00000000,
        0b11111000,
        0b00100000,
        0b11111000,
        0b00100000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('t', 6, [
        0b00000000,
        0b11111000,
        0b00001000,
        0b00001000,
        0b00001000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('u', 6, [
        0b00000000,
        0b01010000,
        0b11111000,
        0b00000000,
        0b11111000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('v', 6, [
        0b00000000,
        0b00100000,
        0b00100000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b00000000,
        0b00000000,
    ]),
    glyph('w', 6, [
        0b00000000,
        0b00000000,
        0b00100000,
        0b00000000,
        0b10001000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('x', 6, [
        0b00000000,
        0b00100000,
        0b00000000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b00000000,
        0b00000000,
    ]),
    glyph('y', 4, [
        0b00000000,
        0b10100000,
        0b10100000,
        0b10100000,
        0b10100000,
        0b10100000,
        0b00000000,
        0b00000000,
    ]),
    glyph('z', 6, [
        0b00000000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
        0b00000000,
        0b00000000,
    ]),
];

/// The illager runic alphabet, indexed by lower-case latin letter.
pub(super) static ILLAGER_GLYPHS: [GlyphData; 26] = [
    glyph('a', 6, [
        0b00000000,
        0b00100000,
        0b01010000,
        0b10001000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('b', 6, [
        0b00000000,
        0b11110000,
        0b10010000,
        0b11100000,
        0b10010000,
        0b10001000,
        0b11111000,
        0b00000000,
    ]),
    glyph('c', 6, [
        0b00000000,
        0b01111000,
        0b10000000,
        0b10100000,
        0b10000000,
        0b10000000,
        0b01111000,
        0b00000000,
    ]),
    glyph('d', 6, [
        0b00000000,
        0b11100000,
        0b10010000,
        0b10001000,
        0b10001000,
        0b10010000,
        0b11100000,
        0b00000000,
    ]),
    glyph('e', 6, [
        0b00000000,
        0b11111000,
        0b10000000,
        0b11110000,
        0b10000000,
        0b10000000,
        0b11111000,
        0b00000000,
    ]),
    glyph('f', 6, [
        0b00000000,
        0b11111000,
        0b10000000,
        0b11100000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('g', 6, [
        0b00000000,
        0b01111000,
        0b10000000,
        0b10011000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('h', 6, [
        0b00000000,
        0b10001000,
        0b10001000,
        0b11111000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('i', 4, [
        0b00000000,
        0b11100000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b01000000,
        0b11100000,
        0b00000000,
    ]),
    glyph('j', 6, [
        0b00000000,
        0b00111000,
        0b00010000,
        0b00010000,
        0b10010000,
        0b10010000,
        0b01100000,
        0b00000000,
    ]),
    glyph('k', 6, [
        0b00000000,
        0b10010000,
        0b10100000,
        0b11000000,
        0b10100000,
        0b10010000,
        0b10001000,
        0b00000000,
    ]),
    glyph('l', 5, [
        0b00000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b11110000,
        0b00000000,
    ]),
    glyph('m', 6, [
        0b00000000,
        0b10001000,
        0b11011000,
        0b10101000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('n', 6, [
        0b00000000,
        0b10001000,
        0b11001000,
        0b10101000,
        0b10011000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('o', 6, [
        0b00000000,
        0b01110000,
        0b10001000,
        0b10101000,
        0b10001000,
        0b10001000,
        0b01110000,
        0b00000000,
    ]),
    glyph('p', 6, [
        0b00000000,
        0b11110000,
        0b10001000,
        0b11110000,
        0b10000000,
        0b10000000,
        0b10000000,
        0b00000000,
    ]),
    glyph('q', 6, [
        0b00000000,
        0b01110000,
        0b10001000,
        0b10001000,
        0b10101000,
        0b10010000,
        0b01101000,
        0b00000000,
    ]),
    glyph('r', 6, [
        0b00000000,
        0b11110000,
        0b10001000,
        0b11110000,
        0b10100000,
        0b10010000,
        0b10001000,
        0b00000000,
    ]),
    glyph('s', 6, [
        0b00000000,
        0b01111000,
        0b10000000,
        0b01110000,
        0b00001000,
        0b00001000,
        0b11110000,
        0b00000000,
    ]),
    glyph('t', 6, [
        0b00000000,
        0b11111000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b01110000,
        0b00100000,
        0b00000000,
    ]),
    glyph('u', 6, [
        0b00000000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10001000,
        0b10101000,
        0b01110000,
        0b00000000,
    ]),
    glyph('v', 6, [
        0b00000000,
        0b10001000,
        0b10001000,
        0b01010000,
        0b01010000,
        0b00100000,
        0b00100000,
        0b00000000,
    ]),
    glyph('w', 6, [
        0b00000000,
        0b10001000,
        0b10001000,
        0b10101000,
        0b10101000,
        0b11011000,
        0b10001000,
        0b00000000,
    ]),
    glyph('x', 6, [
        0b00000000,
        0b10001000,
        0b01010000,
        0b00100000,
        0b01010000,
        0b10001000,
        0b10001000,
        0b00000000,
    ]),
    glyph('y', 6, [
        0b00000000,
        0b10001000,
        0b01010000,
        0b00100000,
        0b00100000,
        0b00100000,
        0b01110000,
        0b00000000,
    ]),
    glyph('z', 6, [
        0b00000000,
        0b11111000,
        0b00010000,
        0b00100000,
        0b01000000,
        0b10000000,
        0b11111000,
        0b00000000,
    ]),
];
