//! This module implements functionality to replace an existing serie.

use crate::database::DatabaseError;
use crate::http::problem_details::{AsProblemDetails, ExtensionMembers, Problem};

use super::{Serie, SerieId, SerieRequest, SerieService, ValidationErrors};

impl SerieService
{
	/// Overwrites every field of an existing serie.
	///
	/// The serie must exist before `request` is validated; fields omitted from `request` are
	/// cleared.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn update_serie(&self, id: SerieId, request: SerieRequest) -> Result<Serie, Error>
	{
		if self.repository.get(id).await?.is_none() {
			return Err(Error::SerieNotFound);
		}

		let fields = request.into_fields()?;
		let serie = self
			.repository
			.save(Some(id), &fields)
			.await?
			.ok_or(Error::SerieNotFound)?;

		info!(%id, "updated serie");

		Ok(serie)
	}
}

/// Errors that can occur when updating a serie.
#[derive(Debug, thiserror::Error)]
pub enum Error
{
	#[error("serie not found")]
	SerieNotFound,

	#[error(transparent)]
	Validation(#[from] ValidationErrors),

	#[error("something went wrong; please report this incident")]
	Database(#[from] DatabaseError),
}

impl AsProblemDetails for Error
{
	fn problem_type(&self) -> Problem
	{
		match self {
			Self::SerieNotFound => Problem::ResourceNotFound,
			Self::Validation(_) => Problem::ValidationFailed,
			Self::Database(_) => Problem::Internal,
		}
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		if let Self::Validation(errors) = self {
			extension_members.add("errors", errors);
		}
	}
}

impl_into_response!(Error);
