use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Attribute maps keep the order their entries were inserted in.
pub type Attributes = IndexMap<String, Value>;

/// A renderable value.
///
/// This is the whole set of kinds the DSL formatter knows how to write;
/// nested attribute data is always some combination of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Integer(i64),
    /// Integers past `i64::MAX`.
    UnsignedInteger(u64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Hash(Attributes),
}

impl Value {
    /// Name of the value's kind as the DSL spells its class.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "NilClass",
            Value::Bool(true) => "TrueClass",
            Value::Bool(false) => "FalseClass",
            Value::Integer(_) | Value::UnsignedInteger(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Hash(_) => "Hash",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::UnsignedInteger(n), Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Attributes> for Value {
    fn from(map: Attributes) -> Self {
        Value::Hash(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UnsignedInteger(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Hash(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunListItemKind {
    Recipe,
    Role,
}

impl RunListItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunListItemKind::Recipe => "recipe",
            RunListItemKind::Role => "role",
        }
    }
}

/// One entry of a run list, e.g. `recipe[nginx::default]` or `role[base]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunListItem {
    pub kind: RunListItemKind,
    pub name: String,
    /// Pinned cookbook version, recipes only.
    pub version: Option<String>,
}

impl RunListItem {
    pub fn recipe(name: impl Into<String>) -> Self {
        Self {
            kind: RunListItemKind::Recipe,
            name: name.into(),
            version: None,
        }
    }

    pub fn role(name: impl Into<String>) -> Self {
        Self {
            kind: RunListItemKind::Role,
            name: name.into(),
            version: None,
        }
    }

    fn parse_recipe(body: &str, original: &str) -> Result<Self> {
        let (name, version) = match body.split_once('@') {
            Some((name, version)) => {
                if !is_version(version) {
                    return Err(Error::InvalidRunListItem(original.to_string()));
                }
                (name, Some(version.to_string()))
            }
            None => (body, None),
        };

        if name.is_empty() || name.contains(['[', ']']) {
            return Err(Error::InvalidRunListItem(original.to_string()));
        }

        Ok(Self {
            kind: RunListItemKind::Recipe,
            name: name.to_string(),
            version,
        })
    }
}

/// `x.y` or `x.y.z` with all-digit parts.
fn is_version(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    (2..=3).contains(&parts.len())
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

impl FromStr for RunListItem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let item = s.trim();

        if let Some(body) = item
            .strip_prefix("recipe[")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return Self::parse_recipe(body, s);
        }

        if let Some(body) = item
            .strip_prefix("role[")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if body.is_empty() || body.contains(['[', ']']) {
                return Err(Error::InvalidRunListItem(s.to_string()));
            }
            return Ok(Self::role(body));
        }

        // Bare names are recipes; anything else bracketed is a typo'd type.
        Self::parse_recipe(item, s)
    }
}

impl fmt::Display for RunListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}[{}@{}]", self.kind.as_str(), self.name, version),
            None => write!(f, "{}[{}]", self.kind.as_str(), self.name),
        }
    }
}

/// A role: a named bundle of attributes and a run list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Role {
    pub name: String,
    pub description: String,
    pub default_attributes: Attributes,
    pub override_attributes: Attributes,
    pub run_list: Vec<RunListItem>,
    /// Run lists keyed by environment name.
    pub env_run_lists: IndexMap<String, Vec<RunListItem>>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_attributes(mut self, attributes: Attributes) -> Self {
        self.default_attributes = attributes;
        self
    }

    pub fn override_attributes(mut self, attributes: Attributes) -> Self {
        self.override_attributes = attributes;
        self
    }

    pub fn run_list(mut self, items: Vec<RunListItem>) -> Self {
        self.run_list = items;
        self
    }

    pub fn env_run_list(mut self, environment: impl Into<String>, items: Vec<RunListItem>) -> Self {
        self.env_run_lists.insert(environment.into(), items);
        self
    }
}

/// An environment: cookbook version constraints plus attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    pub name: String,
    pub description: String,
    /// Cookbook name to version constraint, in declaration order.
    pub cookbook_versions: IndexMap<String, String>,
    pub default_attributes: Attributes,
    pub override_attributes: Attributes,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn cookbook(mut self, cookbook: impl Into<String>, constraint: impl Into<String>) -> Self {
        self.cookbook_versions.insert(cookbook.into(), constraint.into());
        self
    }

    pub fn default_attributes(mut self, attributes: Attributes) -> Self {
        self.default_attributes = attributes;
        self
    }

    pub fn override_attributes(mut self, attributes: Attributes) -> Self {
        self.override_attributes = attributes;
        self
    }
}

/// Anything that can be rendered as a DSL file.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Role(Role),
    Environment(Environment),
}

impl Entity {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entity::Role(_) => "role",
            Entity::Environment(_) => "environment",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Role(role) => &role.name,
            Entity::Environment(env) => &env.name,
        }
    }
}

impl From<Role> for Entity {
    fn from(role: Role) -> Self {
        Entity::Role(role)
    }
}

impl From<Environment> for Entity {
    fn from(env: Environment) -> Self {
        Entity::Environment(env)
    }
}
