//! Utilities for unit & integration tests.

use axum::Router;
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::database::ConnectionPool;
use crate::http::{Body, Request, Response};

mod macros;

#[allow(unused_imports)]
pub(crate) use macros::*;

#[allow(unused_imports)]
pub(crate) use anyhow::bail;

pub type Error = anyhow::Error;
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// A router backed by a fresh in-memory database.
pub(crate) struct TestApp
{
	router: Router,
}

impl TestApp
{
	pub(crate) async fn new() -> Result<Self>
	{
		let pool = ConnectionPool::in_memory().await?;
		let router = crate::http::router(pool);

		Ok(Self { router })
	}

	/// Sends a single request through the full middleware stack.
	pub(crate) async fn send(&self, request: Request) -> Result<Response>
	{
		let response = self.router.clone().oneshot(request).await?;

		Ok(response)
	}

	pub(crate) async fn get(&self, uri: &str) -> Result<Response>
	{
		self.send(empty_request(http::Method::GET, uri)?).await
	}

	pub(crate) async fn delete(&self, uri: &str) -> Result<Response>
	{
		self.send(empty_request(http::Method::DELETE, uri)?).await
	}

	pub(crate) async fn post_json(&self, uri: &str, body: &impl Serialize) -> Result<Response>
	{
		self.send(json_request(http::Method::POST, uri, body)?).await
	}

	pub(crate) async fn put_json(&self, uri: &str, body: &impl Serialize) -> Result<Response>
	{
		self.send(json_request(http::Method::PUT, uri, body)?).await
	}
}

pub(crate) fn empty_request(method: http::Method, uri: &str) -> Result<Request>
{
	let request = http::Request::builder()
		.method(method)
		.uri(uri)
		.body(Body::empty())?;

	Ok(request)
}

pub(crate) fn json_request(
	method: http::Method,
	uri: &str,
	body: &impl Serialize,
) -> Result<Request>
{
	let request = http::Request::builder()
		.method(method)
		.uri(uri)
		.header(http::header::CONTENT_TYPE, "application/json")
		.body(Body::from(serde_json::to_vec(body)?))?;

	Ok(request)
}

/// Collects the response body and parses it as JSON.
pub(crate) async fn json_body<T>(response: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let bytes = response.into_body().collect().await?.to_bytes();
	let parsed = serde_json::from_slice(&bytes)?;

	Ok(parsed)
}
