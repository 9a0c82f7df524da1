//! Various generic HTTP responses.

mod created;
pub use created::Created;

mod error;
pub use error::ErrorResponse;
