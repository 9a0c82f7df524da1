use tower_http::request_id::{
	MakeRequestId,
	PropagateRequestIdLayer,
	RequestId,
	SetRequestIdLayer,
};
use uuid::Uuid;

/// Assigns every incoming request an `x-request-id` header, unless it already has one.
pub(crate) fn set_layer() -> SetRequestIdLayer<Uuidv7>
{
	SetRequestIdLayer::x_request_id(Uuidv7)
}

/// Copies the request's `x-request-id` header onto the response.
pub(crate) fn propagate_layer() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Uuidv7;

impl MakeRequestId for Uuidv7
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Uuid::now_v7()
			.hyphenated()
			.to_string()
			.parse::<http::HeaderValue>()
			.map(RequestId::new)
			.ok()
	}
}
