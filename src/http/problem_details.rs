//! [RFC 9457] problem details.
//!
//! Every error response produced by the API is a JSON object of this shape:
//!
//! ```json
//! {
//!   "type": "https://series-api.example.org/problems/resource-not-found",
//!   "status": 404,
//!   "title": "resource not found",
//!   "detail": "serie not found"
//! }
//! ```
//!
//! [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457.html

use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Prefix of every `type` member.
const BASE_URI: &str = "https://series-api.example.org/problems";

/// The various types of problems that could be referenced by a "problem details" error
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem
{
	MissingHeader,
	InvalidPathParameters,
	InvalidRequestBody,
	ValidationFailed,
	ResourceNotFound,
	Internal,
}

impl Problem
{
	/// The last segment of the `type` URI.
	pub fn fragment(&self) -> &'static str
	{
		match self {
			Self::MissingHeader => "missing-header",
			Self::InvalidPathParameters => "invalid-path-parameters",
			Self::InvalidRequestBody => "invalid-request-body",
			Self::ValidationFailed => "validation-failed",
			Self::ResourceNotFound => "resource-not-found",
			Self::Internal => "internal",
		}
	}

	pub fn status(&self) -> http::StatusCode
	{
		match self {
			Self::MissingHeader | Self::InvalidPathParameters => http::StatusCode::BAD_REQUEST,
			Self::InvalidRequestBody | Self::ValidationFailed => {
				http::StatusCode::UNPROCESSABLE_ENTITY
			},
			Self::ResourceNotFound => http::StatusCode::NOT_FOUND,
			Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	pub fn title(&self) -> &'static str
	{
		match self {
			Self::MissingHeader => "missing header",
			Self::InvalidPathParameters => "invalid path parameter(s)",
			Self::InvalidRequestBody => "invalid request body",
			Self::ValidationFailed => "request body failed validation",
			Self::ResourceNotFound => "resource not found",
			Self::Internal => "internal server error",
		}
	}
}

/// Extra members to include in [`ProblemDetails`].
///
/// See [Section 3.2] of the RFC.
///
/// [Section 3.2]: https://www.rfc-editor.org/rfc/rfc9457.html#section-3.2
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtensionMembers
{
	fields: serde_json::Map<String, serde_json::Value>,
}

impl ExtensionMembers
{
	/// Adds a new extension member, replacing any previous member with the same `name`.
	///
	/// Values that cannot be represented as JSON are skipped.
	pub fn add<V>(&mut self, name: impl Into<String>, value: &V)
	where
		V: Serialize + ?Sized,
	{
		let name = name.into();

		match serde_json::to_value(value) {
			Ok(value) => {
				self.fields.insert(name, value);
			},
			Err(error) => {
				error!(%error, %name, "failed to serialize extension member");
			},
		}
	}

	pub fn get(&self, name: &str) -> Option<&serde_json::Value>
	{
		self.fields.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)>
	{
		self.fields.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub fn count(&self) -> usize
	{
		self.fields.len()
	}
}

/// An error response body as described by [RFC 9457].
///
/// [RFC 9457]: https://www.rfc-editor.org/rfc/rfc9457.html
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDetails
{
	problem_type: Problem,
	detail: Option<Cow<'static, str>>,
	extension_members: ExtensionMembers,
}

impl ProblemDetails
{
	pub fn new(problem_type: Problem) -> Self
	{
		Self { problem_type, detail: None, extension_members: ExtensionMembers::default() }
	}

	pub fn problem_type(&self) -> Problem
	{
		self.problem_type
	}

	pub fn detail(&self) -> Option<&str>
	{
		self.detail.as_deref()
	}

	pub fn extension_members(&self) -> &ExtensionMembers
	{
		&self.extension_members
	}

	pub fn extension_members_mut(&mut self) -> &mut ExtensionMembers
	{
		&mut self.extension_members
	}

	/// Populates the `detail` member.
	pub fn set_detail(&mut self, detail: impl Into<Cow<'static, str>>)
	{
		self.detail = Some(detail.into());
	}

	#[must_use]
	pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self
	{
		self.set_detail(detail);
		self
	}
}

impl Serialize for ProblemDetails
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let field_count = 3 // type + status + title
			+ usize::from(self.detail.is_some())
			+ self.extension_members.count();

		let mut serializer = serializer.serialize_map(Some(field_count))?;

		serializer.serialize_entry(
			"type",
			&format_args!("{BASE_URI}/{}", self.problem_type.fragment()),
		)?;
		serializer.serialize_entry("status", &self.problem_type.status().as_u16())?;
		serializer.serialize_entry("title", self.problem_type.title())?;

		if let Some(detail) = self.detail() {
			serializer.serialize_entry("detail", detail)?;
		}

		for (name, value) in self.extension_members.iter() {
			serializer.serialize_entry(name, value)?;
		}

		serializer.end()
	}
}

impl IntoResponse for ProblemDetails
{
	fn into_response(self) -> Response
	{
		let body = match serde_json::to_vec(&self) {
			Ok(body) => body,
			Err(error) => {
				error!(%error, "failed to serialize problem details");
				return self.problem_type.status().into_response();
			},
		};

		(
			self.problem_type.status(),
			[(http::header::CONTENT_TYPE, "application/problem+json")],
			body,
		)
			.into_response()
	}
}

/// A trait for errors that describe a failed HTTP request.
pub trait AsProblemDetails: std::error::Error
{
	/// The problem type.
	fn problem_type(&self) -> Problem;

	/// Adds extension members to a [`ProblemDetails`] instance being constructed.
	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		let _ = extension_members;
	}

	/// A human-readable explanation specific to this occurrence of the problem.
	fn detail(&self) -> Cow<'static, str>
	{
		Cow::Owned(self.to_string())
	}

	/// Constructs a [`ProblemDetails`] from this error.
	fn as_problem_details(&self) -> ProblemDetails
	{
		let mut problem_details = ProblemDetails::new(self.problem_type()).with_detail(self.detail());

		self.add_extension_members(problem_details.extension_members_mut());

		problem_details
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	#[derive(Debug, thiserror::Error)]
	#[error("no serie with id {0}")]
	struct Missing(i64);

	impl AsProblemDetails for Missing
	{
		fn problem_type(&self) -> Problem
		{
			Problem::ResourceNotFound
		}

		fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
		{
			extension_members.add("id", &self.0);
		}
	}

	#[test]
	fn serializes_all_members() -> testing::Result
	{
		let json = serde_json::to_value(Missing(7).as_problem_details())?;

		testing::assert_eq!(json["type"], format!("{BASE_URI}/resource-not-found"));
		testing::assert_eq!(json["status"], 404);
		testing::assert_eq!(json["title"], "resource not found");
		testing::assert_eq!(json["detail"], "no serie with id 7");
		testing::assert_eq!(json["id"], 7);

		Ok(())
	}

	#[test]
	fn omits_missing_detail() -> testing::Result
	{
		let json = serde_json::to_value(ProblemDetails::new(Problem::Internal))?;

		testing::assert!(json.get("detail").is_none());
		testing::assert_eq!(json["status"], 500);

		Ok(())
	}

	#[tokio::test]
	async fn response_uses_problem_content_type() -> testing::Result
	{
		let response = Missing(1).as_problem_details().into_response();

		testing::assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
		testing::assert_eq!(
			response.headers().get(http::header::CONTENT_TYPE),
			Some(&http::HeaderValue::from_static("application/problem+json")),
		);

		Ok(())
	}
}
