use crate::error::Result;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 2;

/// Indentation state for formatting operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        " ".repeat(self.depth * INDENT_WIDTH)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for entities that become DSL source files
pub trait ToDsl {
    fn to_dsl(&self) -> Result<String>;
}
