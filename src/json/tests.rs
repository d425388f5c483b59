// src/json/tests.rs

use super::{parse_json_component, parse_value, to_json, to_json_value, try_parse_json_component};
use crate::color::{NamedColor, TextColor};
use crate::error::{ComponentError, Error};
use crate::style::Style;
use crate::text::{FormattedText, Span};
use serde_json::json;
use test_log::test;

fn named(color: NamedColor) -> Option<TextColor> {
    Some(TextColor::Named(color))
}

fn strict_err(input: &str) -> ComponentError {
    match try_parse_json_component(input) {
        Err(Error::InvalidJsonComponent(e)) => e,
        other => panic!("expected InvalidJsonComponent for {input}, got {other:?}"),
    }
}

// --- Flattening and inheritance ---

#[test]
fn test_child_inherits_unset_fields() {
    let text = try_parse_json_component(r#"{"text":"A","color":"gold","extra":[{"text":"B"}]}"#)
        .unwrap();
    assert_eq!(
        text.spans(),
        &[
            Span { text: "A".into(), color: named(NamedColor::Gold), style: Style::empty() },
            Span { text: "B".into(), color: named(NamedColor::Gold), style: Style::empty() },
        ]
    );
}

#[test]
fn test_explicit_false_overrides_inherited_true() {
    let text = try_parse_json_component(
        r#"{"text":"a","bold":true,"italic":true,"extra":[{"text":"b","bold":false}]}"#,
    )
    .unwrap();
    assert_eq!(text.spans()[0].style, Style::BOLD | Style::ITALIC);
    assert_eq!(text.spans()[1].style, Style::ITALIC);
}

#[test]
fn test_grandchild_inherits_from_parent_not_root() {
    let text = try_parse_json_component(
        r#"{"text":"r","color":"red","extra":[
            {"text":"c","color":"aqua","underlined":true,"extra":[{"text":"g"}]},
            {"text":"s"}
        ]}"#,
    )
    .unwrap();
    let spans = text.spans();
    assert_eq!(spans.len(), 4);
    assert_eq!(spans[2].text, "g");
    assert_eq!(spans[2].color, named(NamedColor::Aqua));
    assert_eq!(spans[2].style, Style::UNDERLINED);
    assert_eq!(spans[3].text, "s");
    assert_eq!(spans[3].color, named(NamedColor::Red));
    assert_eq!(spans[3].style, Style::empty());
}

#[test]
fn test_empty_parent_still_propagates_style() {
    let text = try_parse_json_component(
        r#"{"text":"","color":"dark_purple","obfuscated":true,"extra":[{"text":"x"}]}"#,
    )
    .unwrap();
    assert_eq!(
        text.spans(),
        &[Span::new("x")
            .with_color(NamedColor::DarkPurple)
            .with_style(Style::OBFUSCATED)]
    );
}

#[test]
fn test_hex_colors_and_reset() {
    let text = try_parse_json_component(
        r##"{"text":"a","color":"#FF8800","extra":[{"text":"b","color":"reset"}]}"##,
    )
    .unwrap();
    assert_eq!(text.spans()[0].color, Some(TextColor::Rgb { r: 255, g: 136, b: 0 }));
    assert_eq!(text.spans()[1].color, None);
}

#[test]
fn test_unsupported_fields_are_ignored() {
    let text = try_parse_json_component(
        r#"{"text":"hi","translate":"chat.type","keybind":"key.jump","selector":"@p",
            "clickEvent":{"action":"open_url","value":"x"}}"#,
    )
    .unwrap();
    assert_eq!(text.spans(), &[Span::new("hi")]);
}

#[test]
fn test_root_string_and_array_forms() {
    assert_eq!(try_parse_json_component(r#""plain""#).unwrap().spans(), &[Span::new("plain")]);
    let text =
        try_parse_json_component(r#"[{"text":"a","color":"green"},{"text":"b"}]"#).unwrap();
    assert_eq!(text.spans()[1].color, named(NamedColor::Green));
    assert!(try_parse_json_component("[]").unwrap().is_empty());
}

// --- Strict errors ---

#[test]
fn test_numeric_text_is_wrong_type() {
    assert_eq!(
        strict_err(r#"{"text":1}"#),
        ComponentError::WrongType { field: "text", expected: "a string" }
    );
    assert!(parse_json_component(r#"{"text":1}"#).spans().is_empty());
}

#[test]
fn test_boolean_fields_must_be_booleans() {
    assert_eq!(
        strict_err(r#"{"text":"a","bold":"yes"}"#),
        ComponentError::WrongType { field: "bold", expected: "a boolean" }
    );
    assert_eq!(
        strict_err(r#"{"text":"a","extra":{"text":"b"}}"#),
        ComponentError::WrongType { field: "extra", expected: "an array" }
    );
}

#[test]
fn test_color_errors() {
    assert_eq!(
        strict_err(r#"{"text":"a","color":"purple"}"#),
        ComponentError::UnknownColor("purple".into())
    );
    assert_eq!(
        strict_err(r##"{"text":"a","color":"#12345"}"##),
        ComponentError::MalformedHex("#12345".into())
    );
    assert_eq!(
        strict_err(r#"{"text":"a","color":7}"#),
        ComponentError::WrongType { field: "color", expected: "a string" }
    );
}

#[test]
fn test_non_object_extra_element() {
    assert_eq!(
        strict_err(r#"{"text":"a","extra":[{"text":"b"},"c"]}"#),
        ComponentError::NonObjectElement { index: 1 }
    );
    assert_eq!(
        strict_err(r#"[{"text":"a"},{"text":"b"},3]"#),
        ComponentError::NonObjectElement { index: 2 }
    );
}

#[test]
fn test_nested_error_index_is_not_shifted_by_root_array() {
    assert_eq!(
        strict_err(r#"[{"text":"a"},{"text":"b","extra":[5]}]"#),
        ComponentError::NonObjectElement { index: 0 }
    );
    assert_eq!(
        strict_err(r#"[{"text":"a"},{"text":"b","extra":[{"text":"c"},true]}]"#),
        ComponentError::NonObjectElement { index: 1 }
    );
}

#[test]
fn test_syntax_and_root_errors() {
    assert!(matches!(strict_err("{not json"), ComponentError::Syntax(_)));
    assert_eq!(strict_err("42"), ComponentError::NotAComponent { found: "a number" });
    assert!(parse_json_component("{not json").is_empty());
}

#[test]
fn test_errors_deep_in_tree_fail_whole_parse() {
    let input = r#"{"text":"a","extra":[{"text":"b","extra":[{"text":"c","italic":1}]}]}"#;
    assert!(matches!(strict_err(input), ComponentError::WrongType { field: "italic", .. }));
    assert!(parse_json_component(input).spans().is_empty());
}

// --- Serialization ---

#[test]
fn test_to_json_shapes() {
    assert_eq!(to_json_value(&FormattedText::new()), json!({"text": ""}));

    let single = FormattedText::from_spans(vec![Span::new("hi")
        .with_color(NamedColor::Red)
        .with_style(Style::BOLD)]);
    assert_eq!(to_json_value(&single), json!({"text": "hi", "color": "red", "bold": true}));

    let many = FormattedText::parse("§aA§9§oB");
    assert_eq!(
        to_json_value(&many),
        json!({"text": "", "extra": [
            {"text": "A", "color": "green"},
            {"text": "B", "color": "blue", "italic": true}
        ]})
    );
}

#[test]
fn test_to_json_writes_rgb_as_hex() {
    let text = FormattedText::from_spans(vec![
        Span::new("x").with_color(TextColor::Rgb { r: 1, g: 2, b: 255 })
    ]);
    assert_eq!(to_json_value(&text)["color"], json!("#0102ff"));
}

#[test]
fn test_json_round_trips() {
    let texts = [
        FormattedText::parse("§cRed §lBold§r plain §k§m§n§ostyled"),
        FormattedText::parse("single"),
        FormattedText::from_spans(vec![
            Span::new("rgb").with_color(TextColor::Rgb { r: 18, g: 52, b: 86 }),
            Span::new(" then plain"),
        ]),
    ];
    for text in texts {
        assert_eq!(try_parse_json_component(&to_json(&text)).unwrap(), text);
    }
}

#[test]
fn test_parse_value_accepts_decoded_json() {
    let value = json!({"text": "v", "strikethrough": true});
    assert_eq!(
        parse_value(&value).unwrap().spans(),
        &[Span::new("v").with_style(Style::STRIKETHROUGH)]
    );
}
