use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::http::problem_details::{AsProblemDetails, ExtensionMembers, Problem};

/// An [extractor] for JSON request bodies.
///
/// This is the same as [`axum::Json`], except that it rejects with problem details, like every
/// other error the API returns.
///
/// [extractor]: axum::extract
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
	S: Send + Sync,
	T: DeserializeOwned,
{
	type Rejection = JsonRejection;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::MissingContentType);
		}

		let bytes = Bytes::from_request(req, state).await?;
		let parsed = serde_json::from_slice(&bytes)?;

		Ok(Self(parsed))
	}
}

impl<T> IntoResponse for Json<T>
where
	axum::Json<T>: IntoResponse,
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

/// Rejection for the [`Json`] extractor.
#[derive(Debug, thiserror::Error)]
pub enum JsonRejection
{
	#[error("missing `Content-Type: application/json` header")]
	MissingContentType,

	#[error("failed to read request body")]
	ReadRequestBody(#[from] axum::extract::rejection::BytesRejection),

	#[error(transparent)]
	Deserialize(#[from] serde_json::Error),
}

impl AsProblemDetails for JsonRejection
{
	fn problem_type(&self) -> Problem
	{
		match self {
			Self::MissingContentType => Problem::MissingHeader,
			Self::ReadRequestBody(_) | Self::Deserialize(_) => Problem::InvalidRequestBody,
		}
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		if let Self::Deserialize(source) = self {
			extension_members.add("line", &source.line());
			extension_members.add("column", &source.column());
		}
	}
}

impl_into_response!(JsonRejection);

/// Checks if the given `headers` contain a JSON-like Content-Type.
fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		return false;
	};

	let Ok(mime) = content_type.parse::<mime::Mime>() else {
		return false;
	};

	mime.type_() == "application"
		&& (mime.subtype() == "json" || mime.suffix().is_some_and(|name| name == "json"))
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	#[test]
	fn recognizes_json_content_types()
	{
		let mut headers = http::HeaderMap::new();

		for (content_type, expected) in [
			("application/json", true),
			("application/json; charset=utf-8", true),
			("application/problem+json", true),
			("text/plain", false),
			("application/x-www-form-urlencoded", false),
		] {
			headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static(content_type));
			assert_eq!(has_json_content_type(&headers), expected, "{content_type}");
		}

		headers.clear();
		assert!(!has_json_content_type(&headers));
	}

	#[test]
	fn syntax_errors_carry_position() -> testing::Result
	{
		let Err(source) = serde_json::from_str::<serde_json::Value>("{\n  \"name\": }") else {
			testing::bail!("invalid JSON parsed successfully");
		};

		let problem_details = JsonRejection::from(source).as_problem_details();

		testing::assert_eq!(problem_details.problem_type(), Problem::InvalidRequestBody);
		testing::assert_eq!(
			problem_details.extension_members().get("line"),
			Some(&serde_json::json!(2)),
		);
		testing::assert!(problem_details.extension_members().get("column").is_some());

		Ok(())
	}
}
