pub mod diff;

pub use crate::model::diff::change_type::ChangeType;
pub use crate::model::diff::text_diff::{DiffSegment, TextDiff};
