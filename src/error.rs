// src/error.rs

//! Error types surfaced by the parsing and rendering pipeline.
//!
//! Only strict JSON parsing, color resolution and renderer construction can
//! fail. The legacy parser and glyph lookup recover locally.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A color string that is neither a known name nor a `#RRGGBB` value.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A JSON chat component with the wrong shape.
    #[error("invalid JSON component: {0}")]
    InvalidJsonComponent(#[from] ComponentError),

    /// Zero-sized render target.
    #[error("invalid render dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A caller-supplied buffer that does not hold `width * height` RGBA pixels.
    #[error("render buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// The specific way a chat component failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("malformed JSON: {0}")]
    Syntax(String),

    #[error("component must be an object, array or string, found {found}")]
    NotAComponent { found: &'static str },

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown color name {0:?}")]
    UnknownColor(String),

    #[error("malformed hex color {0:?}")]
    MalformedHex(String),

    #[error("element {index} of `extra` is not an object")]
    NonObjectElement { index: usize },
}
