//! Integration tests: source text → spans → layout → pixels
//!
//! These tests drive the public API end to end, the way an embedding
//! application would.

use mcformat::{
    count_visible_chars, named_colors, render, strip_codes, FontSystem, FormattedText,
    LayoutEngine, LayoutOptions, NamedColor, RenderConfig, Rgba, SoftwareRenderer, Span, Style,
    TextColor,
};

#[test]
fn test_legacy_and_json_sources_render_identically() {
    let legacy = FormattedText::parse("§6Gold §lbold");
    let json = FormattedText::try_parse_json(
        r#"{"text":"Gold ","color":"gold","extra":[{"text":"bold","bold":true}]}"#,
    )
    .expect("valid component");
    assert_eq!(legacy, json);

    let fonts = FontSystem::modern();
    let options = LayoutOptions::new(16.0).with_shadow(true);
    let a = render(&fonts, &legacy, 128, 24, &options).unwrap();
    let b = render(&fonts, &json, 128, 24, &options).unwrap();
    assert_eq!(a, b);
    assert!(a.data().chunks_exact(4).any(|p| p[3] == 255));
}

#[test]
fn test_builder_matches_parsed_text() {
    let built = FormattedText::builder("Warning: ")
        .color(NamedColor::Red)
        .bold()
        .then("disk almost full")
        .color(NamedColor::Gray)
        .build();
    assert_eq!(built, FormattedText::parse("§c§lWarning: §7disk almost full"));
    assert_eq!(built.plain_text(), "Warning: disk almost full");
}

#[test]
fn test_serialization_round_trips_through_both_formats() {
    let text = FormattedText::parse("§aHello §r§o, §9§nworld§k!");
    let via_json = FormattedText::try_parse_json(&text.to_json()).unwrap();
    assert_eq!(via_json, text);
    assert_eq!(FormattedText::parse(&via_json.to_legacy()), text);
}

#[test]
fn test_strip_and_count_agree() {
    for s in ["", "plain", "§cRed §lBold", "§z§§x§", "é§aü§k日本"] {
        assert_eq!(strip_codes(s).chars().count(), count_visible_chars(s), "{s:?}");
    }
    assert_eq!(strip_codes("§cRed §lBold"), "Red Bold");
}

#[test]
fn test_named_color_table_is_a_bijection() {
    let table = named_colors();
    assert_eq!(table.len(), 16);
    for entry in table {
        assert_eq!(NamedColor::from_code(entry.code), Some(entry.color));
        assert_eq!(NamedColor::from_name(entry.name), Some(entry.color));
        assert_eq!(
            TextColor::resolve(entry.name).unwrap(),
            TextColor::Named(entry.color)
        );
    }
}

#[test]
fn test_measure_agrees_with_layout_width() {
    let fonts = FontSystem::modern();
    let text = FormattedText::parse("§eThe quick brown fox");
    let layout = LayoutEngine::new(&fonts).layout(&text, &LayoutOptions::new(24.0));
    assert_eq!(layout.width, fonts.measure(&text.plain_text(), 24.0));
}

#[test]
fn test_wrapped_text_fits_its_box() {
    let fonts = FontSystem::modern();
    let text = FormattedText::parse("§bA longer chat line that needs to wrap twice");
    let options = LayoutOptions::new(8.0).with_max_width(80.0);
    let layout = LayoutEngine::new(&fonts).layout(&text, &options);
    assert!(layout.lines >= 2);
    assert!(layout.width <= 80.0);

    let result = render(&fonts, &text, 80, layout.height.ceil() as u32, &options).unwrap();
    assert_eq!(result.data().len(), 80 * result.height as usize * 4);
}

#[test]
fn test_obfuscated_render_is_reproducible() {
    let fonts = FontSystem::modern();
    let text = FormattedText::from_spans(vec![Span::new("secret").with_style(Style::OBFUSCATED)]);
    let options = LayoutOptions::new(8.0).with_seed(99);
    let first = render(&fonts, &text, 48, 9, &options).unwrap();
    let second = render(&fonts, &text, 48, 9, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_over_caller_background() {
    let fonts = FontSystem::legacy();
    let background = vec![0, 0, 0, 255].repeat(16 * 9);
    let mut renderer = SoftwareRenderer::from_buffer(16, 9, background).unwrap();
    renderer.render_text(&fonts, &FormattedText::parse("§f!"), 0.0, 0.0, &LayoutOptions::new(8.0));
    let result = renderer.into_result();
    assert_eq!(result.pixel(0, 0), Some(Rgba::opaque(255, 255, 255)));
    assert_eq!(result.pixel(0, 5), Some(Rgba::opaque(0, 0, 0)));
}

#[test]
fn test_config_driven_render() {
    let config = RenderConfig::from_json_str(
        r#"{"layout": {"size": 8, "shadow": false}, "background": [32, 32, 32, 255]}"#,
    )
    .unwrap();
    let text = FormattedText::parse_json(r#"{"text":"!","color":"white"}"#);
    let result = config.render(&text, 4, 9).unwrap();
    assert_eq!(result.pixel(0, 0), Some(Rgba::opaque(255, 255, 255)));
    assert_eq!(result.pixel(3, 3), Some(Rgba::opaque(32, 32, 32)));
}
