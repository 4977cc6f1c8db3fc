/// Helper for rendering string literals
pub struct StringLiteral;

impl StringLiteral {
    /// Quote `s` so the DSL reads it back as exactly `s`.
    ///
    /// Plain strings use single quotes, where only `\` and `'` need escaping.
    /// Single-quoted literals cannot express control characters, so strings
    /// carrying any (newlines included) fall back to a double-quoted literal.
    pub fn quote(s: &str) -> String {
        if s.chars().any(char::is_control) {
            Self::double_quoted(s)
        } else {
            Self::single_quoted(s)
        }
    }

    pub fn single_quoted(s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for c in s.chars() {
            if c == '\\' || c == '\'' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
        out
    }

    pub fn double_quoted(s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('"');
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                // Stops `#{`, `#@` and `#$` from interpolating.
                '#' => out.push_str("\\#"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                '\u{1b}' => out.push_str("\\e"),
                c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    /// Prefix every non-empty line of `text`, the first one included.
    pub fn indent_lines(text: &str, indent: &str) -> String {
        Self::indent_from(text, indent, 0)
    }

    /// Prefix every non-empty line after the first.
    pub fn indent_following_lines(text: &str, indent: &str) -> String {
        Self::indent_from(text, indent, 1)
    }

    fn indent_from(text: &str, indent: &str, skip: usize) -> String {
        if indent.is_empty() {
            return text.to_string();
        }

        text.split('\n')
            .enumerate()
            .map(|(i, line)| {
                if i < skip || line.is_empty() {
                    line.to_string()
                } else {
                    format!("{}{}", indent, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
