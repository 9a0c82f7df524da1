//! Persistence for series.

use std::fmt;

use crate::database::{ConnectionPool, DatabaseResult};

use super::{Serie, SerieFields, SerieId};

/// Storage backend for [`SerieService`].
///
/// [`SerieService`]: super::SerieService
#[async_trait::async_trait]
pub trait SerieRepository: fmt::Debug + Send + Sync
{
	/// Fetches a single serie.
	async fn get(&self, id: SerieId) -> DatabaseResult<Option<Serie>>;

	/// Fetches every serie, in whatever order the store returns them.
	async fn list(&self) -> DatabaseResult<Vec<Serie>>;

	/// Inserts a new serie if `id` is [`None`], and overwrites the existing one otherwise.
	///
	/// Returns [`None`] if there is no serie with the given `id`.
	async fn save(&self, id: Option<SerieId>, fields: &SerieFields) -> DatabaseResult<Option<Serie>>;

	/// Removes a serie permanently.
	///
	/// Returns whether a serie with the given `id` existed.
	async fn delete(&self, id: SerieId) -> DatabaseResult<bool>;
}

#[async_trait::async_trait]
impl SerieRepository for ConnectionPool
{
	#[instrument(level = "debug", skip(self), err)]
	async fn get(&self, id: SerieId) -> DatabaseResult<Option<Serie>>
	{
		let serie = sqlx::query_as::<_, Serie>(
			"SELECT id, name, release_date, rating, category
			 FROM series
			 WHERE id = ?",
		)
		.bind(id)
		.fetch_optional(self.as_raw())
		.await?;

		Ok(serie)
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn list(&self) -> DatabaseResult<Vec<Serie>>
	{
		let series = sqlx::query_as::<_, Serie>(
			"SELECT id, name, release_date, rating, category
			 FROM series",
		)
		.fetch_all(self.as_raw())
		.await?;

		Ok(series)
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn save(&self, id: Option<SerieId>, fields: &SerieFields) -> DatabaseResult<Option<Serie>>
	{
		let SerieFields { name, release_date, rating, category } = fields;

		let Some(id) = id else {
			let serie = sqlx::query_as::<_, Serie>(
				"INSERT INTO series (name, release_date, rating, category)
				 VALUES (?, ?, ?, ?)
				 RETURNING id, name, release_date, rating, category",
			)
			.bind(name)
			.bind(release_date)
			.bind(rating)
			.bind(category)
			.fetch_one(self.as_raw())
			.await?;

			debug!(id = %serie.id, "created serie");

			return Ok(Some(serie));
		};

		let serie = sqlx::query_as::<_, Serie>(
			"UPDATE series
			 SET name = ?,
			     release_date = ?,
			     rating = ?,
			     category = ?
			 WHERE id = ?
			 RETURNING id, name, release_date, rating, category",
		)
		.bind(name)
		.bind(release_date)
		.bind(rating)
		.bind(category)
		.bind(id)
		.fetch_optional(self.as_raw())
		.await?;

		Ok(serie)
	}

	#[instrument(level = "debug", skip(self), err)]
	async fn delete(&self, id: SerieId) -> DatabaseResult<bool>
	{
		let result = sqlx::query("DELETE FROM series WHERE id = ?")
			.bind(id)
			.execute(self.as_raw())
			.await?;

		Ok(result.rows_affected() > 0)
	}
}
