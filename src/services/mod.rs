//! The API's services.
//!
//! Each service owns its business logic and exposes an `http` module with the handlers that make
//! it reachable over HTTP.

pub mod index;
pub use index::IndexService;

pub mod series;
pub use series::SerieService;
