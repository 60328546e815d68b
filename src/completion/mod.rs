mod suggest;
mod table;

pub use suggest::{Suggestion, is_class_attr_context, static_suggestions, suggest};
