//! Built-in field rules.

pub mod list;
pub mod object;
pub mod required;
pub mod text;

pub use list::BoundedList;
pub use object::RequiredObject;
pub use required::{Pattern, RequiredString};
pub use text::BoundedText;
