use crate::error::{Error, Result};
use crate::model::Value;
use crate::renderer::components::*;
use crate::renderer::formatter::*;
use crate::renderer::traits::*;

/// Output buffer for a DSL source file.
#[derive(Debug, Default)]
pub struct DslWriter {
    out: String,
    formatter: ValueFormatter,
}

impl DslWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn new_line(&mut self) {
        self.out.push('\n');
    }

    /// Write `name(` + one argument per line + `)`.
    ///
    /// Arguments must be strings or hashes. Nothing is written when an
    /// argument of any other kind is passed.
    pub fn write_method(&mut self, name: &str, args: &[Value]) -> Result<()> {
        let arg_values = args
            .iter()
            .map(|arg| match arg {
                Value::String(s) => Ok(StringLiteral::quote(s)),
                Value::Hash(_) => Ok(self.formatter.format(arg, 0)),
                other => Err(Error::UnsupportedValueKind(other.kind_name().to_string())),
            })
            .collect::<Result<Vec<_>>>()?;

        let indent = RenderContext::new().nested().indent();

        self.write(name);
        self.write("(\n");
        self.write(&IndentationHelper::indent_lines(&arg_values.join(",\n"), &indent));
        self.write("\n)");
        self.new_line();

        Ok(())
    }

    /// The finished text, with trailing whitespace removed.
    pub fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attributes;

    #[test]
    fn test_write_method_single_argument() -> Result<()> {
        let mut writer = DslWriter::new();
        writer.write_method("name", &[Value::from("web")])?;
        assert_eq!(writer.finish(), "name(\n  'web'\n)");
        Ok(())
    }

    #[test]
    fn test_write_method_multiple_arguments() -> Result<()> {
        let mut writer = DslWriter::new();
        writer.write_method("cookbook", &[Value::from("nginx"), Value::from(">= 1.0")])?;
        assert_eq!(writer.finish(), "cookbook(\n  'nginx',\n  '>= 1.0'\n)");
        Ok(())
    }

    #[test]
    fn test_write_method_hash_argument_is_indented() -> Result<()> {
        let mut attrs = Attributes::new();
        attrs.insert("port".to_string(), Value::Integer(80));

        let mut writer = DslWriter::new();
        writer.write_method("default_attributes", &[Value::Hash(attrs)])?;
        assert_eq!(writer.finish(), "default_attributes(\n  {\n    'port' => 80\n  }\n)");
        Ok(())
    }

    #[test]
    fn test_write_method_without_arguments() -> Result<()> {
        let mut writer = DslWriter::new();
        writer.write_method("run_list", &[])?;
        assert_eq!(writer.finish(), "run_list(\n\n)");
        Ok(())
    }

    #[test]
    fn test_unsupported_argument_kind_writes_nothing() {
        let mut writer = DslWriter::new();
        let result = writer.write_method("name", &[Value::from("ok"), Value::Integer(3)]);

        match result {
            Err(Error::UnsupportedValueKind(kind)) => assert_eq!(kind, "Integer"),
            other => panic!("expected UnsupportedValueKind, got {:?}", other),
        }
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_finish_trims_trailing_whitespace() -> Result<()> {
        let mut writer = DslWriter::new();
        writer.write_method("name", &[Value::from("x")])?;
        writer.new_line();
        writer.new_line();
        assert_eq!(writer.finish(), "name(\n  'x'\n)");
        Ok(())
    }
}
