//! This module implements functionality to create new series.

use crate::database::DatabaseError;
use crate::http::problem_details::{AsProblemDetails, ExtensionMembers, Problem};

use super::{Serie, SerieRequest, SerieService, ValidationErrors};

impl SerieService
{
	/// Validates `request` and stores it as a new serie.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn create_serie(&self, request: SerieRequest) -> Result<Serie, Error>
	{
		let fields = request.into_fields()?;
		let serie = self
			.repository
			.save(None, &fields)
			.await?
			.ok_or(Error::NotStored)?;

		info!(id = %serie.id, "created serie");

		Ok(serie)
	}
}

/// Errors that can occur when creating a serie.
#[derive(Debug, thiserror::Error)]
pub enum Error
{
	#[error(transparent)]
	Validation(#[from] ValidationErrors),

	/// The database accepted the insert but did not return the new row.
	#[error("something went wrong; please report this incident")]
	NotStored,

	#[error("something went wrong; please report this incident")]
	Database(#[from] DatabaseError),
}

impl AsProblemDetails for Error
{
	fn problem_type(&self) -> Problem
	{
		match self {
			Self::Validation(_) => Problem::ValidationFailed,
			Self::NotStored | Self::Database(_) => Problem::Internal,
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
