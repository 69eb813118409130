//! Constants shared between the library and the server.

pub const DIFFVIEW_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";

/// Directory the template environment is rooted at, relative to the
/// working directory unless overridden via `TEMPLATES_DIR`.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
/// Directory static assets are served from, overridable via `STATIC_DIR`.
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const INDEX_TEMPLATE: &str = "index.html";
pub const DIFF_TEMPLATE: &str = "diff.html";

/// Upper bound on the form-encoded request body.
pub const MAX_FORM_BYTES: usize = 10 * 1024 * 1024;
