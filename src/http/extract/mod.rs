//! Request extractors that reject with problem details.

pub mod json;
pub use json::Json;

pub mod path;
pub use path::Path;
