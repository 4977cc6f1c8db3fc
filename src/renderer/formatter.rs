use crate::model::Value;
use crate::renderer::components::*;
use crate::renderer::traits::*;

/// Recursive pretty-printer from [`Value`] to DSL literal syntax.
///
/// Each nesting level renders its own lines relative to column zero; the
/// enclosing container shifts a child's lines when splicing it in. Hash
/// entries are written in the map's own iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueFormatter;

impl ValueFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render `value` for placement at `indent_level`.
    ///
    /// The first line is returned unindented, the caller places it. Every
    /// following line is shifted `indent_level` levels right.
    pub fn format(&self, value: &Value, indent_level: usize) -> String {
        let rendered = self.render(value);
        let context = RenderContext::new().with_depth(indent_level);
        IndentationHelper::indent_following_lines(&rendered, &context.indent())
    }

    fn render(&self, value: &Value) -> String {
        match value {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::UnsignedInteger(n) => n.to_string(),
            Value::Float(f) => Self::float_literal(*f),
            Value::String(s) => StringLiteral::quote(s),
            Value::Array(items) => {
                let elements: Vec<String> = items.iter().map(|item| self.render(item)).collect();
                Self::block('[', ']', &elements)
            }
            Value::Hash(map) => {
                let entries: Vec<String> = map
                    .iter()
                    .map(|(key, value)| format!("{} => {}", StringLiteral::quote(key), self.render(value)))
                    .collect();
                Self::block('{', '}', &entries)
            }
        }
    }

    /// One entry per line, indented a level inside the delimiters.
    fn block(open: char, close: char, entries: &[String]) -> String {
        if entries.is_empty() {
            return format!("{}{}", open, close);
        }

        let indent = RenderContext::new().nested().indent();
        let body = entries
            .iter()
            .map(|entry| IndentationHelper::indent_lines(entry, &indent))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("{}\n{}\n{}", open, body, close)
    }

    fn float_literal(f: f64) -> String {
        if f.is_nan() {
            "Float::NAN".to_string()
        } else if f.is_infinite() {
            if f > 0.0 {
                "Float::INFINITY".to_string()
            } else {
                "-Float::INFINITY".to_string()
            }
        } else {
            // Debug keeps the fractional part: 1.0, not 1.
            format!("{:?}", f)
        }
    }
}
