//! HTTP handlers for `/`.

use axum::extract::State;
use axum::{Json, Router, routing};

use super::{IndexService, Status};

/// Returns a router for `/`.
pub fn router(index_service: IndexService) -> Router
{
	Router::new()
		.route("/", routing::get(get_status))
		.with_state(index_service)
}

/// Check whether the server is running.
#[utoipa::path(
	get,
	path = "/",
	tag = "Index",
	responses((status = 200, body = Status)),
)]
#[instrument(level = "debug")]
pub(crate) async fn get_status(State(index_service): State<IndexService>) -> Json<Status>
{
	Json(index_service.status())
}
