//! This module implements functionality to list every serie.

use crate::database::DatabaseError;
use crate::http::problem_details::{AsProblemDetails, Problem};

use super::{Serie, SerieService};

impl SerieService
{
	/// Returns every stored serie.
	#[instrument(skip(self), err(level = "debug"))]
	pub async fn get_series(&self) -> Result<Vec<Serie>, Error>
	{
		let series = self.repository.list().await?;

		debug!(count = series.len(), "fetched series");

		Ok(series)
	}
}

/// Errors that can occur when listing series.
#[derive(Debug, thiserror::Error)]
pub enum Error
{
	#[error("something went wrong; please report this incident")]
	Database(#[from] DatabaseError),
}

impl AsProblemDetails for Error
{
	fn problem_type(&self) -> Problem
	{
		match self {
			Self::Database(_) => Problem::Internal,
		}
	}
}

impl_into_response!(Error);
