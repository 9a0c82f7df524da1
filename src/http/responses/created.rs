use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A `201 Created` response carrying the new resource as JSON.
#[derive(Debug)]
pub struct Created<T>(pub T);

impl<T> IntoResponse for Created<T>
where
	T: Serialize,
{
	fn into_response(self) -> Response
	{
		(http::StatusCode::CREATED, axum::Json(self.0)).into_response()
	}
}
