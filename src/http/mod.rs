//! The HTTP facade.
//!
//! Every service that is reachable over HTTP exports a `router()` function; this module merges
//! them into one [`Router`] and wraps it in the middleware stack.

use axum::Router;

use crate::database::ConnectionPool;
use crate::services::{IndexService, SerieService};

pub mod extract;
pub mod problem_details;
pub mod responses;

mod middleware;

pub type Body = axum::body::Body;
pub type Request<B = Body> = http::Request<B>;
pub type Response<B = Body> = http::Response<B>;

/// Result type for HTTP handlers.
pub type Result<T, E = responses::ErrorResponse> = std::result::Result<T, E>;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub fn router(pool: ConnectionPool) -> Router
{
	let index_service = IndexService::new();
	let serie_service = SerieService::new(pool);

	Router::new()
		.merge(crate::services::index::http::router(index_service))
		.merge(crate::services::series::http::router(serie_service))
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer())
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}
