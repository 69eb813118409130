pub mod diff;
pub mod html;
pub mod message;
pub mod version;

pub use crate::view::diff::DiffView;
pub use crate::view::message::StatusMessage;
pub use crate::view::version::VersionResponse;
