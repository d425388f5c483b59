// src/lib.rs

//! Minecraft formatted text: parsing, serialization and software rendering.
//!
//! Text comes in either as a legacy `§`-coded string ([`FormattedText::parse`])
//! or as a JSON chat component ([`FormattedText::try_parse_json`]) and is held
//! as a list of [`Span`]s. A [`FontSystem`] supplies embedded bitmap glyphs,
//! the [`LayoutEngine`] places them and the [`SoftwareRenderer`] draws them
//! into an RGBA buffer.
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod json;
pub mod layout;
pub mod legacy;
pub mod rasterizer;
pub mod style;
pub mod text;

pub use color::{named_colors, shadow_color, NamedColor, NamedColorEntry, TextColor};
pub use config::RenderConfig;
pub use error::{ComponentError, Error, Result};
pub use font::{FontSystem, FontVersion, GlyphRef, GlyphSource, SpecialFont};
pub use json::{parse_json_component, to_json, try_parse_json_component};
pub use layout::{
    LayoutEngine, LayoutOptions, PositionedGlyph, TextAlign, TextLayout, SHADOW_OFFSET,
};
pub use legacy::{to_legacy, LegacyParser};
pub use rasterizer::{render, RenderResult, Rgba, SoftwareRenderer};
pub use style::{Style, StyleOverrides};
pub use text::{count_visible_chars, strip_codes, FormattedText, Span, SpanBuilder};
