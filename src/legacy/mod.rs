// src/legacy/mod.rs

//! Legacy `§`-code formatting: parsing into spans and serializing back.

mod parser;

pub use parser::LegacyParser;
use parser::FormatCode;

use crate::text::FormattedText;
use log::debug;

/// The section sign that introduces a format code.
pub const SECTION_SIGN: char = '§';

/// True when `c` is a recognized code after `§` (`[0-9a-fk-or]`, any case).
pub fn is_format_code(c: char) -> bool {
    FormatCode::from_char(c).is_some()
}

/// Parses a legacy formatted string. Total: every input is valid.
pub fn parse(s: &str) -> FormattedText {
    let mut parser = LegacyParser::new();
    parser.feed_str(s);
    let spans = parser.finish();
    debug!("legacy parse: {} chars -> {} spans", s.chars().count(), spans.len());
    FormattedText::from_spans(spans)
}

/// Serializes a text to a legacy string.
///
/// Every span gets its full color + style prefix so that span boundaries
/// survive a round trip through `parse`; only a leading span without color
/// or style is written bare. RGB colors degrade to the nearest named color.
///
/// The legacy format has no escape for `§`. Span text containing a `§` that
/// forms a code with the next character, or a trailing `§` that pairs with the
/// next span's prefix, is written as is and will not parse back to the same
/// spans.
pub fn to_legacy(text: &FormattedText) -> String {
    let mut out = String::new();
    for (idx, span) in text.spans().iter().enumerate() {
        let bare = idx == 0 && span.color.is_none() && span.style.is_empty();
        if !bare {
            out.push(SECTION_SIGN);
            match span.color {
                Some(color) => out.push(color.nearest_named().code()),
                None => out.push('r'),
            }
            for code in span.style.legacy_codes() {
                out.push(SECTION_SIGN);
                out.push(code);
            }
        }
        out.push_str(&span.text);
    }
    out
}

#[cfg(test)]
mod tests;
