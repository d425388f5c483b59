// src/legacy/parser.rs

//! State machine turning a `§`-coded string into spans.
//!
//! The parser is fed one Unicode scalar value at a time. It keeps the current
//! color and style plus the text collected since the last flush, and emits a
//! span whenever a recognized format code arrives.

use super::SECTION_SIGN;
use crate::color::{NamedColor, TextColor};
use crate::style::Style;
use crate::text::Span;
use log::trace;

/// States of the legacy code scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ParserState {
    /// Plain text: characters go into the buffer.
    #[default]
    Ground,
    /// Just saw `§`; the next character decides between a code and literal text.
    Section,
}

/// What a code character after `§` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormatCode {
    Color(NamedColor),
    Format(Style),
    Reset,
}

impl FormatCode {
    pub(super) fn from_char(code: char) -> Option<Self> {
        if code.eq_ignore_ascii_case(&'r') {
            return Some(FormatCode::Reset);
        }
        NamedColor::from_code(code)
            .map(FormatCode::Color)
            .or_else(|| Style::from_legacy_code(code).map(FormatCode::Format))
    }
}

/// The legacy code parser state machine.
#[derive(Debug, Default)]
pub struct LegacyParser {
    state: ParserState,
    color: Option<TextColor>,
    style: Style,
    buffer: String,
    spans: Vec<Span>,
}

impl LegacyParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a single character into the state machine.
    pub fn feed(&mut self, c: char) {
        match self.state {
            ParserState::Ground => self.handle_ground(c),
            ParserState::Section => self.handle_section(c),
        }
    }

    /// Feeds every character of `s`.
    pub fn feed_str(&mut self, s: &str) {
        for c in s.chars() {
            self.feed(c);
        }
    }

    /// Ends the input and returns the collected spans.
    ///
    /// A dangling `§` at the end of input is kept as literal text.
    pub fn finish(mut self) -> Vec<Span> {
        if self.state == ParserState::Section {
            self.buffer.push(SECTION_SIGN);
        }
        self.flush();
        self.spans
    }

    fn handle_ground(&mut self, c: char) {
        if c == SECTION_SIGN {
            self.state = ParserState::Section;
        } else {
            self.buffer.push(c);
        }
    }

    fn handle_section(&mut self, c: char) {
        self.state = ParserState::Ground;
        let Some(code) = FormatCode::from_char(c) else {
            trace!("literal section sign followed by {:?}", c);
            self.buffer.push(SECTION_SIGN);
            self.buffer.push(c);
            return;
        };

        self.flush();
        trace!("format code {:?} -> {:?}", c, code);
        match code {
            FormatCode::Color(named) => {
                self.color = Some(TextColor::Named(named));
                self.style = Style::empty();
            }
            FormatCode::Format(flag) => self.style.insert(flag),
            FormatCode::Reset => {
                self.color = None;
                self.style = Style::empty();
            }
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.spans.push(Span {
            text: std::mem::take(&mut self.buffer),
            color: self.color,
            style: self.style,
        });
    }
}
