pub mod components;
pub mod formatter;
pub mod renders;
pub mod traits;
pub mod writer;

pub use components::*;
pub use formatter::*;
pub use renders::*;
pub use traits::*;
pub use writer::*;
