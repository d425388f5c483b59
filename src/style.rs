// src/style.rs

//! Defines the text style flags (`Style`) and the tri-state overrides used
//! while resolving JSON chat components (`StyleOverrides`).

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Formatting flags of a span.
    ///
    /// The flags are independent; a style is a flat set
    /// (e.g. `Style::BOLD | Style::ITALIC`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Style: u8 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINED    = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED    = 1 << 4; // glyphs scrambled at render time
    }
}

/// Legacy format codes in the order they are written by `to_legacy`.
const LEGACY_CODES: [(Style, char); 5] = [
    (Style::OBFUSCATED, 'k'),
    (Style::BOLD, 'l'),
    (Style::STRIKETHROUGH, 'm'),
    (Style::UNDERLINED, 'n'),
    (Style::ITALIC, 'o'),
];

impl Style {
    pub fn bold(self) -> bool {
        self.contains(Style::BOLD)
    }

    pub fn italic(self) -> bool {
        self.contains(Style::ITALIC)
    }

    pub fn underlined(self) -> bool {
        self.contains(Style::UNDERLINED)
    }

    pub fn strikethrough(self) -> bool {
        self.contains(Style::STRIKETHROUGH)
    }

    pub fn obfuscated(self) -> bool {
        self.contains(Style::OBFUSCATED)
    }

    /// Maps a legacy format code (`k`-`o`, case-insensitive) to its flag.
    pub fn from_legacy_code(code: char) -> Option<Style> {
        let code = code.to_ascii_lowercase();
        LEGACY_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(flag, _)| *flag)
    }

    /// Legacy codes for every set flag, in `k l m n o` order.
    pub fn legacy_codes(self) -> impl Iterator<Item = char> {
        LEGACY_CODES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, code)| code)
    }

    /// JSON field name of a single flag.
    pub(crate) fn json_field(flag: Style) -> &'static str {
        match flag {
            f if f == Style::BOLD => "bold",
            f if f == Style::ITALIC => "italic",
            f if f == Style::UNDERLINED => "underlined",
            f if f == Style::STRIKETHROUGH => "strikethrough",
            _ => "obfuscated",
        }
    }
}

/// Per-flag overrides of a JSON component: `None` inherits from the parent,
/// `Some(v)` forces the flag to `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleOverrides {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
}

impl StyleOverrides {
    /// Applies the explicit fields on top of an inherited style.
    pub fn apply(&self, inherited: Style) -> Style {
        let mut style = inherited;
        let fields = [
            (Style::BOLD, self.bold),
            (Style::ITALIC, self.italic),
            (Style::UNDERLINED, self.underlined),
            (Style::STRIKETHROUGH, self.strikethrough),
            (Style::OBFUSCATED, self.obfuscated),
        ];
        for (flag, value) in fields {
            if let Some(on) = value {
                style.set(flag, on);
            }
        }
        style
    }

    pub(crate) fn slot(&mut self, flag: Style) -> &mut Option<bool> {
        match flag {
            f if f == Style::BOLD => &mut self.bold,
            f if f == Style::ITALIC => &mut self.italic,
            f if f == Style::UNDERLINED => &mut self.underlined,
            f if f == Style::STRIKETHROUGH => &mut self.strikethrough,
            _ => &mut self.obfuscated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_map_to_flags() {
        assert_eq!(Style::from_legacy_code('k'), Some(Style::OBFUSCATED));
        assert_eq!(Style::from_legacy_code('L'), Some(Style::BOLD));
        assert_eq!(Style::from_legacy_code('m'), Some(Style::STRIKETHROUGH));
        assert_eq!(Style::from_legacy_code('n'), Some(Style::UNDERLINED));
        assert_eq!(Style::from_legacy_code('o'), Some(Style::ITALIC));
        assert_eq!(Style::from_legacy_code('r'), None);
    }

    #[test]
    fn legacy_codes_are_emitted_in_fixed_order() {
        let style = Style::ITALIC | Style::BOLD | Style::OBFUSCATED;
        assert_eq!(style.legacy_codes().collect::<String>(), "klo");
    }

    #[test]
    fn overrides_only_touch_present_fields() {
        let inherited = Style::BOLD | Style::UNDERLINED;
        let overrides = StyleOverrides {
            bold: Some(false),
            italic: Some(true),
            ..Default::default()
        };
        assert_eq!(overrides.apply(inherited), Style::UNDERLINED | Style::ITALIC);
        assert_eq!(StyleOverrides::default().apply(inherited), inherited);
    }
}
