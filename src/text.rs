// src/text.rs

//! The formatted text model: `Span` runs collected in a `FormattedText`.
//!
//! A `FormattedText` is produced by one of the parsers (`legacy`, `json`) or by
//! the fluent `SpanBuilder`, and is treated as an immutable value afterwards.

use crate::color::TextColor;
use crate::error::Result;
use crate::style::Style;
use crate::{json, legacy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A run of text sharing one color and one style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    /// `None` renders in the default (white) color.
    pub color: Option<TextColor>,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            color: None,
            style: Style::empty(),
        }
    }

    pub fn with_color(mut self, color: impl Into<TextColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Ordered sequence of spans; order is reading and rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedText {
    spans: Vec<Span>,
}

impl FormattedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        FormattedText { spans }
    }

    /// Parses a legacy `§`-formatted string. Never fails.
    pub fn parse(s: &str) -> Self {
        legacy::parse(s)
    }

    /// Parses a JSON chat component, returning an empty text on any error.
    pub fn parse_json(s: &str) -> Self {
        json::parse_json_component(s)
    }

    /// Parses a JSON chat component, reporting what was wrong with it.
    pub fn try_parse_json(s: &str) -> Result<Self> {
        json::try_parse_json_component(s)
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Appends the spans of `other` after the spans of `self`.
    pub fn concat(mut self, other: FormattedText) -> Self {
        self.spans.extend(other.spans);
        self
    }

    /// Text of all spans without any formatting.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Number of chars across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|span| span.text.chars().count()).sum()
    }

    /// True when there is no visible text (no spans, or only empty ones).
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    pub fn to_legacy(&self) -> String {
        legacy::to_legacy(self)
    }

    pub fn to_json(&self) -> String {
        json::to_json(self)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_value(self)
    }

    /// Starts a fluent builder whose first span holds `text`.
    pub fn span(self, text: impl Into<String>) -> SpanBuilder {
        SpanBuilder {
            text: self,
            current: Span::new(text),
        }
    }

    /// Starts a fluent builder on an empty text.
    pub fn builder(text: impl Into<String>) -> SpanBuilder {
        FormattedText::new().span(text)
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

impl From<Vec<Span>> for FormattedText {
    fn from(spans: Vec<Span>) -> Self {
        FormattedText::from_spans(spans)
    }
}

/// Fluent builder; every method consumes the builder and returns it.
#[derive(Debug, Clone)]
pub struct SpanBuilder {
    text: FormattedText,
    current: Span,
}

impl SpanBuilder {
    pub fn color(mut self, color: impl Into<TextColor>) -> Self {
        self.current.color = Some(color.into());
        self
    }

    pub fn bold(self) -> Self {
        self.flag(Style::BOLD)
    }

    pub fn italic(self) -> Self {
        self.flag(Style::ITALIC)
    }

    pub fn underlined(self) -> Self {
        self.flag(Style::UNDERLINED)
    }

    pub fn strikethrough(self) -> Self {
        self.flag(Style::STRIKETHROUGH)
    }

    pub fn obfuscated(self) -> Self {
        self.flag(Style::OBFUSCATED)
    }

    fn flag(mut self, flag: Style) -> Self {
        self.current.style.insert(flag);
        self
    }

    /// Finishes the current span and starts a new, unformatted one.
    pub fn then(mut self, text: impl Into<String>) -> Self {
        let finished = std::mem::replace(&mut self.current, Span::new(text));
        self.text.push(finished);
        self
    }

    pub fn build(mut self) -> FormattedText {
        self.text.push(self.current);
        self.text
    }
}

/// Removes every recognized `§` code from a legacy string.
///
/// An unrecognized code is kept together with the char after the `§`, and a
/// trailing `§` is kept, matching `parse`.
pub fn strip_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == legacy::SECTION_SIGN {
            match chars.next() {
                Some(next) if legacy::is_format_code(next) => {
                    out.pop();
                }
                Some(next) => out.push(next),
                None => {}
            }
        }
    }
    out
}

/// Number of chars `strip_codes(s)` would return, without allocating.
pub fn count_visible_chars(s: &str) -> usize {
    let mut count = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == legacy::SECTION_SIGN {
            match chars.next() {
                Some(next) if legacy::is_format_code(next) => continue,
                Some(_) => count += 1,
                None => {}
            }
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn builder_chains_spans() {
        let text = FormattedText::builder("hello ")
            .color(NamedColor::Red)
            .bold()
            .then("world")
            .color(NamedColor::Gold)
            .build();

        assert_eq!(
            text.spans(),
            &[
                Span::new("hello ")
                    .with_color(NamedColor::Red)
                    .with_style(Style::BOLD),
                Span::new("world").with_color(NamedColor::Gold),
            ]
        );
        assert_eq!(text.plain_text(), "hello world");
        assert_eq!(text.char_count(), 11);
    }

    #[test]
    fn concat_keeps_order() {
        let a = FormattedText::parse("§aone");
        let b = FormattedText::parse("§btwo");
        let joined = a.concat(b);
        assert_eq!(joined.spans().len(), 2);
        assert_eq!(joined.to_string(), "onetwo");
    }

    #[test]
    fn empty_text() {
        assert!(FormattedText::new().is_empty());
        assert!(FormattedText::from_spans(vec![Span::new("")]).is_empty());
        assert!(!FormattedText::parse("x").is_empty());
    }

    #[test]
    fn strip_codes_matches_visible_count() {
        let samples = [
            "",
            "plain",
            "§cRed §lBold",
            "§",
            "trailing §",
            "§z not a code",
            "§§a",
            "§r§k§L§m§N§o§F",
            "multi §ébyte ✓ §4x",
        ];
        for s in samples {
            assert_eq!(strip_codes(s).chars().count(), count_visible_chars(s), "{s:?}");
        }
        assert_eq!(strip_codes("§cRed §lBold"), "Red Bold");
        assert_eq!(strip_codes("§z!"), "§z!");
        assert_eq!(strip_codes("§§a"), "§§a");
    }
}
