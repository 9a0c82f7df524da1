use axum::extract::FromRequestParts;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection as BaseRejection;

use crate::http::problem_details::{AsProblemDetails, ExtensionMembers, Problem};

/// An [extractor] for path parameters.
///
/// This is the same as [`axum::extract::Path`], except that it rejects with problem details.
///
/// [extractor]: axum::extract
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PathRejection))]
pub struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PathRejection(#[from] BaseRejection);

impl AsProblemDetails for PathRejection
{
	fn problem_type(&self) -> Problem
	{
		Problem::InvalidPathParameters
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		let BaseRejection::FailedToDeserializePathParams(source) = &self.0 else {
			return;
		};

		match source.kind() {
			ErrorKind::ParseErrorAtKey { key, value, expected_type } => {
				extension_members.add("parameter", key);
				extension_members.add("value", value);
				extension_members.add("expected_type", expected_type);
			},
			ErrorKind::ParseError { value, expected_type } => {
				extension_members.add("value", value);
				extension_members.add("expected_type", expected_type);
			},
			ErrorKind::Message(message) => {
				extension_members.add("reason", message);
			},
			ErrorKind::InvalidUtf8InPathParam { key } => {
				extension_members.add("parameter", key);
			},
			_ => {},
		}
	}
}

impl_into_response!(PathRejection);
