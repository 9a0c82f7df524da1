use std::any::Any;
use std::borrow::Cow;

use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::problem_details::{AsProblemDetails, Problem};

/// Turns handler panics into `500 Internal Server Error` responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

#[derive(Debug, thiserror::Error)]
#[error("something went wrong; please report this incident")]
struct HandlerPanicked;

impl AsProblemDetails for HandlerPanicked
{
	fn problem_type(&self) -> Problem
	{
		Problem::Internal
	}

	fn detail(&self) -> Cow<'static, str>
	{
		Cow::Borrowed("something went wrong; please report this incident")
	}
}

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = crate::http::Body;

	fn response_for_panic(
		&mut self,
		error: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let message = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		error!(?message, "http handler panicked");

		HandlerPanicked.as_problem_details().into_response()
	}
}

#[cfg(test)]
mod tests
{
	use axum::Router;
	use axum::routing::get;
	use tower::ServiceExt;

	use super::*;
	use crate::testing;

	#[tokio::test]
	async fn panics_become_internal_errors() -> testing::Result
	{
		#[allow(clippy::unused_async)]
		async fn explode() -> &'static str
		{
			panic!("boom");
		}

		let router = Router::new().route("/", get(explode)).layer(layer());
		let response = router
			.oneshot(testing::empty_request(http::Method::GET, "/")?)
			.await?;

		testing::assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

		let body: serde_json::Value = testing::json_body(response).await?;

		testing::assert_eq!(body["status"], 500);
		testing::assert_eq!(body["detail"], "something went wrong; please report this incident");

		Ok(())
	}
}
