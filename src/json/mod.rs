// src/json/mod.rs

//! JSON chat components: flattening component trees into spans and
//! serializing spans back into a component.
//!
//! A component is an object such as
//! `{"text":"A","color":"gold","bold":true,"extra":[{"text":"B"}]}`.
//! Children listed in `extra` inherit the effective color and style of their
//! parent unless they override a field themselves.

use crate::color::TextColor;
use crate::error::{ComponentError, Result};
use crate::style::{Style, StyleOverrides};
use crate::text::{FormattedText, Span};
use log::{debug, trace};
use serde_json::{Map, Value};

/// Fields that carry a style flag, in serialization order.
const STYLE_FIELDS: [Style; 5] = [
    Style::BOLD,
    Style::ITALIC,
    Style::UNDERLINED,
    Style::STRIKETHROUGH,
    Style::OBFUSCATED,
];

/// Color and style a node passes down to its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Inherited {
    color: Option<TextColor>,
    style: Style,
}

/// A `color` field: either a concrete color or `"reset"`, which clears
/// the inherited color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorOverride {
    Set(TextColor),
    Reset,
}

/// The fields of one component object that matter for flattening.
#[derive(Debug)]
struct Component<'a> {
    text: Option<&'a str>,
    color: Option<ColorOverride>,
    overrides: StyleOverrides,
    extra: &'a [Value],
}

impl<'a> Component<'a> {
    fn read(map: &'a Map<String, Value>) -> std::result::Result<Self, ComponentError> {
        let text = match map.get("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                return Err(ComponentError::WrongType {
                    field: "text",
                    expected: "a string",
                })
            }
        };

        let color = match map.get("color") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(read_color(s)?),
            Some(_) => {
                return Err(ComponentError::WrongType {
                    field: "color",
                    expected: "a string",
                })
            }
        };

        let mut overrides = StyleOverrides::default();
        for flag in STYLE_FIELDS {
            let field = Style::json_field(flag);
            *overrides.slot(flag) = match map.get(field) {
                None | Some(Value::Null) => None,
                Some(Value::Bool(on)) => Some(*on),
                Some(_) => {
                    return Err(ComponentError::WrongType {
                        field,
                        expected: "a boolean",
                    })
                }
            };
        }

        let extra = match map.get("extra") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(items)) => items.as_slice(),
            Some(_) => {
                return Err(ComponentError::WrongType {
                    field: "extra",
                    expected: "an array",
                })
            }
        };

        Ok(Component {
            text,
            color,
            overrides,
            extra,
        })
    }

    fn resolve(&self, inherited: Inherited) -> Inherited {
        let color = match self.color {
            None => inherited.color,
            Some(ColorOverride::Set(color)) => Some(color),
            Some(ColorOverride::Reset) => None,
        };
        Inherited {
            color,
            style: self.overrides.apply(inherited.style),
        }
    }
}

fn read_color(s: &str) -> std::result::Result<ColorOverride, ComponentError> {
    if s == "reset" {
        return Ok(ColorOverride::Reset);
    }
    match TextColor::resolve(s) {
        Ok(color) => Ok(ColorOverride::Set(color)),
        Err(_) if s.starts_with('#') => Err(ComponentError::MalformedHex(s.to_string())),
        Err(_) => Err(ComponentError::UnknownColor(s.to_string())),
    }
}

/// Flattens one component and its descendants in document order.
fn flatten(
    map: &Map<String, Value>,
    inherited: Inherited,
) -> std::result::Result<Vec<Span>, ComponentError> {
    let component = Component::read(map)?;
    let effective = component.resolve(inherited);

    let mut spans = Vec::new();
    if let Some(text) = component.text.filter(|t| !t.is_empty()) {
        spans.push(Span {
            text: text.to_string(),
            color: effective.color,
            style: effective.style,
        });
    }
    spans.extend(flatten_children(component.extra, effective)?);
    Ok(spans)
}

fn flatten_children(
    children: &[Value],
    inherited: Inherited,
) -> std::result::Result<Vec<Span>, ComponentError> {
    let mut spans = Vec::new();
    for (index, child) in children.iter().enumerate() {
        let Value::Object(map) = child else {
            return Err(ComponentError::NonObjectElement { index });
        };
        spans.extend(flatten(map, inherited)?);
    }
    Ok(spans)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strictly flattens an already-decoded JSON value.
///
/// The root may be a component object, a plain string, or an array whose
/// first element is the parent of the remaining ones.
pub fn parse_value(value: &Value) -> Result<FormattedText> {
    let root = Inherited::default();
    let spans = match value {
        Value::Object(map) => flatten(map, root)?,
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::String(s) => vec![Span::new(s.as_str())],
        Value::Array(items) => match items.split_first() {
            None => Vec::new(),
            Some((Value::Object(parent), rest)) => {
                let component = Component::read(parent)?;
                let mut spans = flatten(parent, root)?;
                let effective = component.resolve(root);
                // Siblings sit at index + 1 in the root array.
                for (index, child) in rest.iter().enumerate() {
                    let Value::Object(map) = child else {
                        return Err(ComponentError::NonObjectElement { index: index + 1 }.into());
                    };
                    spans.extend(flatten(map, effective)?);
                }
                spans
            }
            Some(_) => return Err(ComponentError::NonObjectElement { index: 0 }.into()),
        },
        other => {
            return Err(ComponentError::NotAComponent {
                found: json_type_name(other),
            }
            .into())
        }
    };
    Ok(FormattedText::from_spans(spans))
}

/// Strict parsing of a JSON chat component string.
pub fn try_parse_json_component(json: &str) -> Result<FormattedText> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ComponentError::Syntax(e.to_string()))?;
    let text = parse_value(&value)?;
    debug!("json parse: {} spans", text.spans().len());
    Ok(text)
}

/// Lenient parsing: any error yields an empty text.
pub fn parse_json_component(json: &str) -> FormattedText {
    match try_parse_json_component(json) {
        Ok(text) => text,
        Err(e) => {
            debug!("json parse failed, returning empty text: {}", e);
            FormattedText::new()
        }
    }
}

fn span_to_component(span: &Span) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("text".to_string(), Value::String(span.text.clone()));
    if let Some(color) = span.color {
        map.insert("color".to_string(), Value::String(color.json_name()));
    }
    for flag in STYLE_FIELDS {
        if span.style.contains(flag) {
            map.insert(Style::json_field(flag).to_string(), Value::Bool(true));
        }
    }
    map
}

/// Serializes a text into a chat component value.
///
/// A single span becomes a single component; several spans hang off an
/// empty, unformatted root so that no formatting leaks between siblings.
pub fn to_json_value(text: &FormattedText) -> Value {
    let mut components = text.spans().iter().map(span_to_component);
    match text.spans().len() {
        0 => {
            let mut root = Map::new();
            root.insert("text".to_string(), Value::String(String::new()));
            Value::Object(root)
        }
        1 => Value::Object(components.next().unwrap_or_default()),
        n => {
            trace!("json serialize: {} spans under an empty root", n);
            let mut root = Map::new();
            root.insert("text".to_string(), Value::String(String::new()));
            root.insert(
                "extra".to_string(),
                Value::Array(components.map(Value::Object).collect()),
            );
            Value::Object(root)
        }
    }
}

/// Serializes a text into a chat component string.
pub fn to_json(text: &FormattedText) -> String {
    to_json_value(text).to_string()
}

#[cfg(test)]
mod tests;
