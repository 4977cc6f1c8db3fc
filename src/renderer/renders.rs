use crate::error::Result;
use crate::model::*;
use crate::renderer::traits::*;
use crate::renderer::writer::*;
use tracing::debug;

/// First line of every role file.
pub const ROLE_HEADER: &str = "# encoding: utf-8";

fn run_list_strings(items: &[RunListItem]) -> Vec<Value> {
    items.iter().map(|item| Value::String(item.to_string())).collect()
}

impl ToDsl for Role {
    fn to_dsl(&self) -> Result<String> {
        let mut writer = DslWriter::new();

        writer.write(ROLE_HEADER);
        writer.new_line();
        writer.new_line();

        writer.write_method("name", &[Value::from(self.name.as_str())])?;
        writer.new_line();

        writer.write_method("description", &[Value::from(self.description.as_str())])?;
        writer.new_line();

        writer.write_method("default_attributes", &[Value::Hash(self.default_attributes.clone())])?;
        writer.new_line();

        writer.write_method("override_attributes", &[Value::Hash(self.override_attributes.clone())])?;
        writer.new_line();

        // A single entry can only be the global list; per-environment lists
        // start mattering once a second one exists.
        if self.env_run_lists.len() <= 1 {
            debug!(role = %self.name, items = self.run_list.len(), "emitting run_list");
            writer.write_method("run_list", &run_list_strings(&self.run_list))?;
        } else {
            debug!(role = %self.name, environments = self.env_run_lists.len(), "emitting env_run_lists");
            let lists: Attributes = self
                .env_run_lists
                .iter()
                .map(|(environment, items)| (environment.clone(), Value::Array(run_list_strings(items))))
                .collect();
            writer.write_method("env_run_lists", &[Value::Hash(lists)])?;
        }
        writer.new_line();

        Ok(writer.finish())
    }
}

impl ToDsl for Environment {
    fn to_dsl(&self) -> Result<String> {
        let mut writer = DslWriter::new();

        writer.write_method("name", &[Value::from(self.name.as_str())])?;
        writer.new_line();

        writer.write_method("description", &[Value::from(self.description.as_str())])?;
        writer.new_line();

        for (cookbook, constraint) in &self.cookbook_versions {
            writer.write_method(
                "cookbook",
                &[Value::from(cookbook.as_str()), Value::from(constraint.as_str())],
            )?;
        }
        writer.new_line();

        writer.write_method("default_attributes", &[Value::Hash(self.default_attributes.clone())])?;
        writer.new_line();

        writer.write_method("override_attributes", &[Value::Hash(self.override_attributes.clone())])?;
        writer.new_line();

        Ok(writer.finish())
    }
}

impl ToDsl for Entity {
    fn to_dsl(&self) -> Result<String> {
        let output = match self {
            Entity::Role(role) => role.to_dsl()?,
            Entity::Environment(env) => env.to_dsl()?,
        };

        debug!(
            kind = self.kind_name(),
            name = self.name(),
            bytes = output.len(),
            "rendered entity"
        );

        Ok(output)
    }
}
