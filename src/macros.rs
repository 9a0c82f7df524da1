/// Implements [`IntoResponse`] for a type that implements [`AsProblemDetails`].
///
/// [`IntoResponse`]: axum::response::IntoResponse
/// [`AsProblemDetails`]: crate::http::problem_details::AsProblemDetails
macro_rules! impl_into_response {
	($ty:ty) => {
		impl ::axum::response::IntoResponse for $ty
		{
			fn into_response(self) -> ::axum::response::Response
			{
				let problem_details =
					$crate::http::problem_details::AsProblemDetails::as_problem_details(&self);

				::axum::response::IntoResponse::into_response(problem_details)
			}
		}
	};
}
