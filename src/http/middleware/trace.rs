use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ConnectInfo;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	DefaultOnRequest,
	TraceLayer,
};

use crate::http::{Request, Response};

type Layer = TraceLayer<
	SharedClassifier<ServerErrorsAsFailures>,
	fn(&Request) -> tracing::Span,
	DefaultOnRequest,
	fn(&Response, Duration, &tracing::Span),
	DefaultOnBodyChunk,
	DefaultOnEos,
	fn(ServerErrorsFailureClass, Duration, &tracing::Span),
>;

/// Opens a span for every request and records the outcome on it.
pub(crate) fn layer() -> Layer
{
	TraceLayer::new_for_http()
		.make_span_with(make_span as fn(&Request) -> tracing::Span)
		.on_response(on_response as fn(&Response, Duration, &tracing::Span))
		.on_failure(on_failure as fn(ServerErrorsFailureClass, Duration, &tracing::Span))
}

fn make_span(request: &Request) -> tracing::Span
{
	let span = info_span! {
		target: "series_api::http",
		"request",
		request.id = tracing::field::Empty,
		request.peer_addr = tracing::field::Empty,
		request.method = %request.method(),
		request.uri = %request.uri(),
		response.status = tracing::field::Empty,
		latency = tracing::field::Empty,
	};

	if let Some(request_id) = request
		.extensions()
		.get::<RequestId>()
		.and_then(|id| id.header_value().to_str().ok())
	{
		span.record("request.id", request_id);
	}

	if let Some(ConnectInfo(peer_addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
		span.record("request.peer_addr", format_args!("{peer_addr}"));
	}

	span
}

fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	let status = response.status();

	span.record("response.status", format_args!("{status}"))
		.record("latency", format_args!("{latency:?}"));

	if let Some(message) = response_message(status) {
		debug!(target: "series_api::http", %status, "{message}");
	}
}

/// What to log for a finished response.
///
/// Server errors are reported by [`on_failure()`] instead.
fn response_message(status: http::StatusCode) -> Option<&'static str>
{
	if status.is_server_error() {
		None
	} else if status.is_client_error() {
		Some("client error occurred during request")
	} else {
		Some("finished processing request")
	}
}

fn on_failure(failure: ServerErrorsFailureClass, _latency: Duration, _span: &tracing::Span)
{
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			error!(target: "series_api::http", %error, "error occurred during request");
		},
		ServerErrorsFailureClass::StatusCode(status) if status.is_server_error() => {
			error!(target: "series_api::http", %status, "error occurred during request");
		},
		ServerErrorsFailureClass::StatusCode(status) => {
			warn!(target: "series_api::http", %status, "error occurred during request");
		},
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn client_errors_are_logged_on_response()
	{
		assert_eq!(
			response_message(http::StatusCode::NOT_FOUND),
			Some("client error occurred during request"),
		);
		assert_eq!(
			response_message(http::StatusCode::UNPROCESSABLE_ENTITY),
			Some("client error occurred during request"),
		);
		assert_eq!(response_message(http::StatusCode::OK), Some("finished processing request"));
		assert_eq!(response_message(http::StatusCode::INTERNAL_SERVER_ERROR), None);
	}
}
