use std::str::FromStr;
use std::thread;

use sqlx::migrate::MigrateError;
use sqlx::pool::PoolOptions;
use sqlx::sqlite::SqliteConnectOptions;
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::database::Driver;

/// A pool of database connections.
#[derive(Clone, derive_more::Debug)]
#[debug("ConnectionPool")]
pub struct ConnectionPool(sqlx::Pool<Driver>);

/// Errors returned by [`ConnectionPool::new()`].
#[derive(Debug, Error)]
pub enum ConnectError
{
	/// The configured URL is not a valid SQLite URL.
	#[error("invalid database url: {0}")]
	InvalidUrl(#[source] sqlx::Error),

	/// We could not open the initial connections.
	#[error("failed to connect to the database: {0}")]
	Connect(#[source] sqlx::Error),

	/// We could not apply the schema.
	#[error("failed to run migrations: {0}")]
	Migrate(#[from] MigrateError),
}

impl ConnectionPool
{
	/// Opens a new pool for the database at `config.url` and applies the schema.
	///
	/// `min_connections` connections will be opened (and kept around) immediately.
	/// The pool will never open more than `max_connections`. If `max_connections` is [`None`],
	/// the pool will use the amount of available CPUs instead.
	#[instrument(err, fields(url = %config.url))]
	pub async fn new(config: &DatabaseConfig) -> Result<Self, ConnectError>
	{
		let connect_options = SqliteConnectOptions::from_str(config.url.as_str())
			.map_err(ConnectError::InvalidUrl)?
			.create_if_missing(true)
			.foreign_keys(true);

		let max_connections = config
			.max_connections
			.map_or_else(get_core_count, |max| max.get())
			.max(config.min_connections);

		let pool = PoolOptions::new()
			.min_connections(config.min_connections)
			.max_connections(max_connections)
			.connect_with(connect_options)
			.await
			.map_err(ConnectError::Connect)?;

		Self::migrate(pool).await
	}

	/// Opens a pool backed by a fresh in-memory database.
	///
	/// Every SQLite connection to `:memory:` gets its own database, so the pool holds exactly one
	/// connection that is never recycled.
	#[cfg(test)]
	pub async fn in_memory() -> Result<Self, ConnectError>
	{
		let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
			.map_err(ConnectError::InvalidUrl)?;

		let pool = PoolOptions::new()
			.min_connections(1)
			.max_connections(1)
			.idle_timeout(None)
			.max_lifetime(None)
			.connect_with(connect_options)
			.await
			.map_err(ConnectError::Connect)?;

		Self::migrate(pool).await
	}

	async fn migrate(pool: sqlx::Pool<Driver>) -> Result<Self, ConnectError>
	{
		sqlx::migrate!("./migrations").run(&pool).await?;
		debug!("applied migrations");

		Ok(Self(pool))
	}

	/// Returns the underlying [`sqlx::Pool`].
	pub fn as_raw(&self) -> &sqlx::Pool<Driver>
	{
		&self.0
	}

	/// Closes every connection in the pool.
	///
	/// Pending queries are allowed to finish first.
	pub async fn close(&self)
	{
		self.0.close().await;
	}
}

fn get_core_count() -> u32
{
	thread::available_parallelism()
		.map_or(1, |count| count.get())
		.try_into()
		.unwrap_or(u32::MAX)
}
