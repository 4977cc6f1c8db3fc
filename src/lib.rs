//! # chef-rb
//!
//! Renders Chef roles and environments as Ruby DSL source files.
//!
//! ```
//! use chef_rb::{Environment, ToDsl};
//!
//! let env = Environment::new("prod").cookbook("nginx", ">= 1.0");
//! let source = env.to_dsl().unwrap();
//! assert!(source.starts_with("name(\n  'prod'\n)"));
//! ```

pub mod error;
pub mod model;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use model::*;
pub use renderer::*;

/// Render a role or environment as DSL source.
pub fn to_dsl(entity: &Entity) -> Result<String> {
    entity.to_dsl()
}

/// Load a Chef JSON document and render the entity it describes.
pub fn json_to_dsl(text: &str) -> Result<String> {
    EntityLoader::load_str(text)?.to_dsl()
}
