use crate::error::{Error, Result};
use crate::model::types::*;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value as Json};
use tracing::trace;

/// Run-list key holding the role's global run list.
pub const DEFAULT_ENVIRONMENT: &str = "_default";

const ROLE: &str = "role";
const ENVIRONMENT: &str = "environment";

/// Type markers Chef writes into every persisted document.
#[derive(Debug, Deserialize)]
struct DocumentKind {
    json_class: Option<Json>,
    chef_type: Option<Json>,
}

/// Loader for turning persisted Chef JSON documents into entities.
pub struct EntityLoader<'a> {
    document: &'a Json,
}

impl<'a> EntityLoader<'a> {
    pub fn new(document: &'a Json) -> Self {
        Self { document }
    }

    /// Parse `text` as JSON and load the entity it describes.
    pub fn load_str(text: &str) -> Result<Entity> {
        let document: Json = serde_json::from_str(text)?;
        EntityLoader::new(&document).load()
    }

    pub fn load(&self) -> Result<Entity> {
        let object = match self.document {
            Json::Object(object) => object,
            other => return Err(Error::UnsupportedEntityKind(json_kind(other).to_string())),
        };

        let kind = DocumentKind::deserialize(self.document)?;

        match detect_kind(&kind)? {
            ROLE => Ok(Entity::Role(self.load_role(object)?)),
            _ => Ok(Entity::Environment(self.load_environment(object)?)),
        }
    }

    fn load_role(&self, object: &Map<String, Json>) -> Result<Role> {
        let run_list = match object.get("run_list") {
            None | Some(Json::Null) => run_list_field(object, "recipes")?,
            Some(items) => run_list_items(ROLE, "run_list", items)?,
        };

        // The global run list always sits under `_default`, first.
        let mut env_run_lists = IndexMap::new();
        env_run_lists.insert(DEFAULT_ENVIRONMENT.to_string(), run_list);

        match object.get("env_run_lists") {
            None | Some(Json::Null) => {}
            Some(Json::Object(lists)) => {
                for (environment, items) in lists {
                    let items = run_list_items(ROLE, &format!("env_run_lists.{}", environment), items)?;
                    env_run_lists.insert(environment.clone(), items);
                }
            }
            Some(_) => {
                return Err(Error::InvalidField {
                    kind: ROLE,
                    field: "env_run_lists".to_string(),
                    expected: "an object",
                })
            }
        }

        // A document's own `_default` entry overrides `run_list`.
        let run_list = env_run_lists
            .get(DEFAULT_ENVIRONMENT)
            .cloned()
            .unwrap_or_default();

        Ok(Role {
            name: required_string(ROLE, object, "name")?,
            description: optional_string(ROLE, object, "description")?,
            default_attributes: attributes_field(ROLE, object, "default_attributes")?,
            override_attributes: attributes_field(ROLE, object, "override_attributes")?,
            run_list,
            env_run_lists,
        })
    }

    fn load_environment(&self, object: &Map<String, Json>) -> Result<Environment> {
        let mut cookbook_versions = IndexMap::new();

        match object.get("cookbook_versions") {
            None | Some(Json::Null) => {}
            Some(Json::Object(versions)) => {
                for (cookbook, constraint) in versions {
                    let constraint = constraint.as_str().ok_or_else(|| Error::InvalidField {
                        kind: ENVIRONMENT,
                        field: format!("cookbook_versions.{}", cookbook),
                        expected: "a string",
                    })?;
                    cookbook_versions.insert(cookbook.clone(), constraint.to_string());
                }
            }
            Some(_) => {
                return Err(Error::InvalidField {
                    kind: ENVIRONMENT,
                    field: "cookbook_versions".to_string(),
                    expected: "an object",
                })
            }
        }

        Ok(Environment {
            name: required_string(ENVIRONMENT, object, "name")?,
            description: optional_string(ENVIRONMENT, object, "description")?,
            cookbook_versions,
            default_attributes: attributes_field(ENVIRONMENT, object, "default_attributes")?,
            override_attributes: attributes_field(ENVIRONMENT, object, "override_attributes")?,
        })
    }
}

/// `json_class` takes precedence over `chef_type`.
fn detect_kind(kind: &DocumentKind) -> Result<&'static str> {
    if let Some(class) = &kind.json_class {
        trace!(?class, "detecting entity kind from json_class");
        return match class.as_str() {
            Some("Chef::Role") => Ok(ROLE),
            Some("Chef::Environment") => Ok(ENVIRONMENT),
            Some(other) => Err(Error::UnsupportedEntityKind(other.to_string())),
            None => Err(Error::UnsupportedEntityKind(json_kind(class).to_string())),
        };
    }

    if let Some(chef_type) = &kind.chef_type {
        trace!(?chef_type, "detecting entity kind from chef_type");
        return match chef_type.as_str() {
            Some(ROLE) => Ok(ROLE),
            Some(ENVIRONMENT) => Ok(ENVIRONMENT),
            Some(other) => Err(Error::UnsupportedEntityKind(other.to_string())),
            None => Err(Error::UnsupportedEntityKind(json_kind(chef_type).to_string())),
        };
    }

    Err(Error::UnsupportedEntityKind("object".to_string()))
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn required_string(kind: &'static str, object: &Map<String, Json>, field: &'static str) -> Result<String> {
    match object.get(field) {
        None | Some(Json::Null) => Err(Error::MissingField { kind, field }),
        Some(Json::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::InvalidField {
            kind,
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

fn optional_string(kind: &'static str, object: &Map<String, Json>, field: &'static str) -> Result<String> {
    match object.get(field) {
        None | Some(Json::Null) => Ok(String::new()),
        Some(Json::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::InvalidField {
            kind,
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

fn attributes_field(kind: &'static str, object: &Map<String, Json>, field: &'static str) -> Result<Attributes> {
    match object.get(field) {
        None | Some(Json::Null) => Ok(Attributes::new()),
        Some(Json::Object(map)) => Ok(map
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.clone())))
            .collect()),
        Some(_) => Err(Error::InvalidField {
            kind,
            field: field.to_string(),
            expected: "an object",
        }),
    }
}

fn run_list_field(object: &Map<String, Json>, field: &'static str) -> Result<Vec<RunListItem>> {
    match object.get(field) {
        None | Some(Json::Null) => Ok(Vec::new()),
        Some(items) => run_list_items(ROLE, field, items),
    }
}

fn run_list_items(kind: &'static str, field: &str, items: &Json) -> Result<Vec<RunListItem>> {
    let invalid = || Error::InvalidField {
        kind,
        field: field.to_string(),
        expected: "an array of strings",
    };

    items
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| -> Result<RunListItem> { item.as_str().ok_or_else(invalid)?.parse() })
        .collect()
}
