//! A liveness probe.

use serde::Serialize;

pub mod http;

/// Reports whether the server is up.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexService;

impl IndexService
{
	pub fn new() -> Self
	{
		Self
	}

	/// Returns the server's status.
	///
	/// This does not touch any other part of the system.
	pub fn status(&self) -> Status
	{
		Status { mensaje: "servidor activo" }
	}
}

/// Response for `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Status
{
	/// Always `"servidor activo"`.
	pub mensaje: &'static str,
}
