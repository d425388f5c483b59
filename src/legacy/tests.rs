// src/legacy/tests.rs

use super::{parse, to_legacy, LegacyParser};
use crate::color::{NamedColor, TextColor};
use crate::style::Style;
use crate::text::{FormattedText, Span};
use test_log::test;

fn red() -> Option<TextColor> {
    Some(TextColor::Named(NamedColor::Red))
}

// --- Basic parsing ---

#[test]
fn test_empty_input_has_no_spans() {
    assert!(parse("").spans().is_empty());
}

#[test]
fn test_plain_text_is_one_uncolored_span() {
    assert_eq!(parse("Hello, world!").spans(), &[Span::new("Hello, world!")]);
}

#[test]
fn test_color_persists_across_format_code() {
    let text = parse("§cRed §lBold");
    assert_eq!(
        text.spans(),
        &[
            Span { text: "Red ".into(), color: red(), style: Style::empty() },
            Span { text: "Bold".into(), color: red(), style: Style::BOLD },
        ]
    );
}

#[test]
fn test_color_code_resets_style() {
    let text = parse("§l§obold italic§agreen");
    assert_eq!(text.spans()[0].style, Style::BOLD | Style::ITALIC);
    assert_eq!(text.spans()[0].color, None);
    assert_eq!(text.spans()[1].style, Style::empty());
    assert_eq!(text.spans()[1].color, Some(TextColor::Named(NamedColor::Green)));
}

#[test]
fn test_reset_clears_color_and_style() {
    let text = parse("§c§nwarn§rplain");
    assert_eq!(text.spans()[1], Span::new("plain"));
}

#[test]
fn test_every_format_code() {
    let cases = [
        ('k', Style::OBFUSCATED),
        ('l', Style::BOLD),
        ('m', Style::STRIKETHROUGH),
        ('n', Style::UNDERLINED),
        ('o', Style::ITALIC),
    ];
    for (code, flag) in cases {
        let text = parse(&format!("§{code}x"));
        assert_eq!(text.spans(), &[Span::new("x").with_style(flag)], "code {code}");
    }
}

#[test]
fn test_codes_are_case_insensitive() {
    assert_eq!(parse("§Cx"), parse("§cx"));
    assert_eq!(parse("§Lx"), parse("§lx"));
    assert_eq!(parse("§Rx§Fy").spans()[1].color, Some(TextColor::Named(NamedColor::White)));
}

#[test]
fn test_all_sixteen_color_codes() {
    for named in NamedColor::ALL {
        let text = parse(&format!("§{}x", named.code()));
        assert_eq!(text.spans()[0].color, Some(TextColor::Named(named)));
    }
}

// --- Literal section signs ---

#[test]
fn test_unknown_code_is_literal_without_flush() {
    let text = parse("§cA§zB");
    assert_eq!(
        text.spans(),
        &[Span { text: "A§zB".into(), color: red(), style: Style::empty() }]
    );
}

#[test]
fn test_trailing_section_sign_is_literal() {
    assert_eq!(parse("end§").spans(), &[Span::new("end§")]);
    assert_eq!(parse("§").spans(), &[Span::new("§")]);
}

#[test]
fn test_section_sign_followed_by_section_sign() {
    // The second `§` is consumed as the literal partner of the first.
    assert_eq!(parse("§§a").spans(), &[Span::new("§§a")]);
}

#[test]
fn test_multibyte_text_is_preserved() {
    let text = parse("§6✓ §eé日本");
    assert_eq!(text.spans()[0].text, "✓ ");
    assert_eq!(text.spans()[1].text, "é日本");
}

// --- Flush semantics ---

#[test]
fn test_consecutive_codes_do_not_emit_empty_spans() {
    let text = parse("§c§l§o§r§ahi");
    assert_eq!(text.spans().len(), 1);
}

#[test]
fn test_identical_styles_are_not_coalesced() {
    let text = parse("§ca§cb");
    assert_eq!(text.spans().len(), 2);
    assert_eq!(text.spans()[0].text, "a");
    assert_eq!(text.spans()[1].text, "b");
}

#[test]
fn test_incremental_feed_matches_parse() {
    let input = "§cRed §lBold§r and §zplain§";
    let mut parser = LegacyParser::new();
    for c in input.chars() {
        parser.feed(c);
    }
    assert_eq!(FormattedText::from_spans(parser.finish()), parse(input));
}

// --- Serialization ---

#[test]
fn test_to_legacy_leading_plain_span_is_bare() {
    assert_eq!(parse("hello").to_legacy(), "hello");
}

#[test]
fn test_to_legacy_writes_color_then_styles() {
    let text = FormattedText::from_spans(vec![Span::new("x")
        .with_color(NamedColor::Gold)
        .with_style(Style::BOLD | Style::UNDERLINED)]);
    assert_eq!(to_legacy(&text), "§6§l§nx");
}

#[test]
fn test_to_legacy_round_trips() {
    let inputs = [
        "§cRed §lBold",
        "plain §4dark §rreset §k§omixed",
        "§ca§cb",
        "§l§mno color",
        "lit §z text",
    ];
    for input in inputs {
        let text = parse(input);
        assert_eq!(parse(&text.to_legacy()), text, "{input}");
    }
}

#[test]
fn test_to_legacy_does_not_escape_section_signs() {
    let trailing = FormattedText::from_spans(vec![
        Span::new("x§"),
        Span::new("b").with_color(TextColor::Named(NamedColor::Red)),
    ]);
    assert_eq!(to_legacy(&trailing), "x§§cb");
    assert_eq!(parse(&to_legacy(&trailing)).spans(), &[Span::new("x§§cb")]);

    // A code inside span text is reinterpreted.
    let embedded = FormattedText::from_spans(vec![Span::new("a§cb")]);
    assert_ne!(parse(&to_legacy(&embedded)), embedded);

    // A `§` that forms no code survives.
    let literal = FormattedText::from_spans(vec![Span::new("50§ off")]);
    assert_eq!(parse(&to_legacy(&literal)), literal);
}

#[test]
fn test_to_legacy_degrades_rgb_to_nearest() {
    let text = FormattedText::from_spans(vec![
        Span::new("a"),
        Span::new("b").with_color(TextColor::Rgb { r: 250, g: 80, b: 90 }),
    ]);
    assert_eq!(text.to_legacy(), "a§cb");
}
