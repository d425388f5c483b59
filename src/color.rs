// src/color.rs

//! Defines color-related types (`NamedColor`, `TextColor`) and the
//! process-wide table of the sixteen formatting colors.

use crate::error::{Error, Result};
use log::trace;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The sixteen formatting colors, in legacy code order (`0`-`9`, `a`-`f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkAqua = 3,
    DarkRed = 4,
    DarkPurple = 5,
    Gold = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Aqua = 11,
    Red = 12,
    LightPurple = 13,
    Yellow = 14,
    White = 15,
}

/// One row of the named color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColorEntry {
    pub color: NamedColor,
    pub name: &'static str,
    pub code: char,
    pub rgb: (u8, u8, u8),
}

const NAMED_COLOR_TABLE: [NamedColorEntry; 16] = [
    entry(NamedColor::Black, "black", '0', (0, 0, 0)),
    entry(NamedColor::DarkBlue, "dark_blue", '1', (0, 0, 170)),
    entry(NamedColor::DarkGreen, "dark_green", '2', (0, 170, 0)),
    entry(NamedColor::DarkAqua, "dark_aqua", '3', (0, 170, 170)),
    entry(NamedColor::DarkRed, "dark_red", '4', (170, 0, 0)),
    entry(NamedColor::DarkPurple, "dark_purple", '5', (170, 0, 170)),
    entry(NamedColor::Gold, "gold", '6', (255, 170, 0)),
    entry(NamedColor::Gray, "gray", '7', (170, 170, 170)),
    entry(NamedColor::DarkGray, "dark_gray", '8', (85, 85, 85)),
    entry(NamedColor::Blue, "blue", '9', (85, 85, 255)),
    entry(NamedColor::Green, "green", 'a', (85, 255, 85)),
    entry(NamedColor::Aqua, "aqua", 'b', (85, 255, 255)),
    entry(NamedColor::Red, "red", 'c', (255, 85, 85)),
    entry(NamedColor::LightPurple, "light_purple", 'd', (255, 85, 255)),
    entry(NamedColor::Yellow, "yellow", 'e', (255, 255, 85)),
    entry(NamedColor::White, "white", 'f', (255, 255, 255)),
];

const fn entry(
    color: NamedColor,
    name: &'static str,
    code: char,
    rgb: (u8, u8, u8),
) -> NamedColorEntry {
    NamedColorEntry { color, name, code, rgb }
}

static BY_NAME: Lazy<HashMap<&'static str, NamedColor>> = Lazy::new(|| {
    NAMED_COLOR_TABLE
        .iter()
        .map(|e| (e.name, e.color))
        .collect()
});

static BY_CODE: Lazy<HashMap<char, NamedColor>> = Lazy::new(|| {
    NAMED_COLOR_TABLE
        .iter()
        .map(|e| (e.code, e.color))
        .collect()
});

/// Returns the sixteen-entry named color table in code order.
pub fn named_colors() -> &'static [NamedColorEntry; 16] {
    &NAMED_COLOR_TABLE
}

impl NamedColor {
    /// All named colors in code order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Converts an index (0-15) to a `NamedColor`.
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    /// Looks up a color by its legacy code character (case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        BY_CODE.get(&code.to_ascii_lowercase()).copied()
    }

    /// Looks up a color by its JSON name (`"dark_red"`, `"gold"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    fn entry(self) -> &'static NamedColorEntry {
        &NAMED_COLOR_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn code(self) -> char {
        self.entry().code
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        self.entry().rgb
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color attached to a span: either one of the sixteen named colors or an
/// arbitrary RGB value (JSON components only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

impl From<NamedColor> for TextColor {
    fn from(named: NamedColor) -> Self {
        TextColor::Named(named)
    }
}

impl TextColor {
    /// Resolves a color from a JSON color string.
    ///
    /// Accepts one of the sixteen names or `#RRGGBB` (exactly six hex digits,
    /// either case). The name path and the hex path are independent.
    pub fn resolve(name_or_hex: &str) -> Result<Self> {
        if let Some(hex) = name_or_hex.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| Error::InvalidColor(name_or_hex.to_string()));
        }
        NamedColor::from_name(name_or_hex)
            .map(TextColor::Named)
            .ok_or_else(|| Error::InvalidColor(name_or_hex.to_string()))
    }

    /// Concrete RGB triple of this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            TextColor::Named(named) => named.rgb(),
            TextColor::Rgb { r, g, b } => (r, g, b),
        }
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The string used for this color in a JSON component.
    pub fn json_name(&self) -> String {
        match self {
            TextColor::Named(named) => named.name().to_string(),
            TextColor::Rgb { .. } => self.to_hex(),
        }
    }

    /// Closest named color by squared RGB distance. Ties go to the lower code.
    pub fn nearest_named(&self) -> NamedColor {
        if let TextColor::Named(named) = self {
            return *named;
        }
        let (r, g, b) = self.rgb();
        let distance = |named: &NamedColor| {
            let (nr, ng, nb) = named.rgb();
            let dr = r as i32 - nr as i32;
            let dg = g as i32 - ng as i32;
            let db = b as i32 - nb as i32;
            dr * dr + dg * dg + db * db
        };
        let nearest = NamedColor::ALL
            .iter()
            .min_by_key(|named| distance(named))
            .copied()
            .unwrap_or(NamedColor::White);
        trace!("nearest named color for {} is {}", self.to_hex(), nearest);
        nearest
    }
}

fn parse_hex(hex: &str) -> Option<TextColor> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(TextColor::Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    })
}

/// Darkens a color the way the game darkens drop shadows (each channel / 4).
pub fn shadow_color(rgb: (u8, u8, u8)) -> (u8, u8, u8) {
    (rgb.0 / 4, rgb.1 / 4, rgb.2 / 4)
}
