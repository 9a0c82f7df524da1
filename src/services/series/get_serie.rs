//! This module implements functionality to get a specific serie.

use crate::database::DatabaseError;
use crate::http::problem_details::{AsProblemDetails, Problem};

use super::{Serie, SerieId, SerieService};

impl SerieService
{
	/// Gets a specific serie by its ID.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn get_serie(&self, id: SerieId) -> Result<Serie, Error>
	{
		self.repository.get(id).await?.ok_or(Error::SerieNotFound)
	}
}

/// Errors that can occur when getting a serie.
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
