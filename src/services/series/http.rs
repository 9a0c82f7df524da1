//! This module contains the HTTP handlers for the `/serie` endpoints.

use axum::extract::State;
use axum::{Router, routing};

use super::{Serie, SerieId, SerieRequest, SerieService};
use crate::http::extract::{Json, Path};
use crate::http::responses::Created;

/// Returns a router for the `/serie` endpoints.
pub fn router(serie_service: SerieService) -> Router
{
	Router::new()
		.route("/serie/", routing::get(get_series).post(create_serie))
		.route(
			"/serie/{serie_id}",
			routing::get(get_serie)
				.put(update_serie)
				.delete(delete_serie),
		)
		.with_state(serie_service)
}

/// Fetch every serie.
#[utoipa::path(
	get,
	path = "/serie/",
	tag = "Series",
	responses(
		(status = 200, body = Vec<Serie>),
		(status = 500, description = "the database failed"),
	),
)]
#[instrument(level = "debug", err(level = "debug"))]
pub(crate) async fn get_series(
	State(serie_service): State<SerieService>,
) -> crate::http::Result<Json<Vec<Serie>>>
{
	let series = serie_service.get_series().await?;

	Ok(Json(series))
}

/// Create a new serie.
#[utoipa::path(
	post,
	path = "/serie/",
	tag = "Series",
	request_body = SerieRequest,
	responses(
		(status = 201, body = Serie),
		(status = 400, description = "missing `Content-Type: application/json`"),
		(status = 422, description = "the body is not valid JSON or failed validation"),
		(status = 500, description = "the database failed"),
	),
)]
#[instrument(level = "debug", err(level = "debug"))]
pub(crate) async fn create_serie(
	State(serie_service): State<SerieService>,
	Json(request): Json<SerieRequest>,
) -> crate::http::Result<Created<Serie>>
{
	let serie = serie_service.create_serie(request).await?;

	Ok(Created(serie))
}

/// Fetch a specific serie.
#[utoipa::path(
	get,
	path = "/serie/{serie_id}",
	tag = "Series",
	params(("serie_id" = SerieId, Path, description = "the serie's ID")),
	responses(
		(status = 200, body = Serie),
		(status = 400, description = "the ID is not a positive integer"),
		(status = 404, description = "there is no serie with this ID"),
		(status = 500, description = "the database failed"),
	),
)]
#[instrument(level = "debug", err(level = "debug"))]
pub(crate) async fn get_serie(
	State(serie_service): State<SerieService>,
	Path(serie_id): Path<SerieId>,
) -> crate::http::Result<Json<Serie>>
{
	let serie = serie_service.get_serie(serie_id).await?;

	Ok(Json(serie))
}

/// Replace every field of a specific serie.
#[utoipa::path(
	put,
	path = "/serie/{serie_id}",
	tag = "Series",
	params(("serie_id" = SerieId, Path, description = "the serie's ID")),
	request_body = SerieRequest,
	responses(
		(status = 200, body = Serie),
		(status = 400, description = "invalid ID or missing `Content-Type: application/json`"),
		(status = 404, description = "there is no serie with this ID"),
		(status = 422, description = "the body is not valid JSON or failed validation"),
		(status = 500, description = "the database failed"),
	),
)]
#[instrument(level = "debug", err(level = "debug"))]
pub(crate) async fn update_serie(
	State(serie_service): State<SerieService>,
	Path(serie_id): Path<SerieId>,
	Json(request): Json<SerieRequest>,
) -> crate::http::Result<Json<Serie>>
{
	let serie = serie_service.update_serie(serie_id, request).await?;

	Ok(Json(serie))
}

/// Delete a specific serie.
///
/// The response contains the serie as it was before deletion.
#[utoipa::path(
	delete,
	path = "/serie/{serie_id}",
	tag = "Series",
	params(("serie_id" = SerieId, Path, description = "the serie's ID")),
	responses(
		(status = 200, body = Serie),
		(status = 400, description = "the ID is not a positive integer"),
		(status = 404, description = "there is no serie with this ID"),
		(status = 500, description = "the database failed"),
	),
)]
#[instrument(level = "debug", err(level = "debug"))]
pub(crate) async fn delete_serie(
	State(serie_service): State<SerieService>,
	Path(serie_id): Path<SerieId>,
) -> crate::http::Result<Json<Serie>>
{
	let serie = serie_service.delete_serie(serie_id).await?;

	Ok(Json(serie))
}
