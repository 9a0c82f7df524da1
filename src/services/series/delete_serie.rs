//! This module implements functionality to delete series.

use crate::database::DatabaseError;
use crate::http::problem_details::{AsProblemDetails, Problem};

use super::{Serie, SerieId, SerieService};

impl SerieService
{
	/// Deletes a serie and returns what it looked like before.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn delete_serie(&self, id: SerieId) -> Result<Serie, Error>
	{
		let serie = self
			.repository
			.get(id)
			.await?
			.ok_or(Error::SerieNotFound)?;

		// someone else may have deleted it in the meantime
		if !self.repository.delete(id).await? {
			return Err(Error::SerieNotFound);
		}

		info!(%id, "deleted serie");

		Ok(serie)
	}
}

/// Errors that can occur when deleting a serie.
#[derive(Debug, thiserror::Error)]
pub enum Error
{
	#[error("serie not found")]
	SerieNotFound,

	#[error("something went wrong; please report this incident")]
	Database(#[from] DatabaseError),
}

impl AsProblemDetails for Error
{
	fn problem_type(&self) -> Problem
	{
		match self {
			Self::SerieNotFound => Problem::ResourceNotFound,
			Self::Database(_) => Problem::Internal,
		}
	}
}

impl_into_response!(Error);
