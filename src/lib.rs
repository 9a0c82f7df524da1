//! series-api - a small CRUD service for TV series.
//!
//! This crate implements the record store, the HTTP facade on top of it, and the glue needed to
//! run both as a server.

/*
 * series-api
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::io;
use std::net::SocketAddr;

#[macro_use]
extern crate tracing;

#[cfg(test)]
mod testing;

#[macro_use]
mod macros;

pub mod database;
pub use database::ConnectError;

pub mod http;
mod signals;

pub mod config;
pub use config::Config;

pub mod logging;
pub mod openapi;
pub mod services;

/// Runs the HTTP server until it receives a shutdown signal.
pub async fn run(config: Config) -> Result<(), RunError>
{
	let pool = database::ConnectionPool::new(&config.database).await?;
	let service = http::router(pool.clone())
		.into_make_service_with_connect_info::<SocketAddr>();

	let tcp_listener = tokio::net::TcpListener::bind(config.http.socket_addr()).await?;
	let addr = tcp_listener.local_addr()?;

	info!(%addr, "listening for http requests");

	axum::serve(tcp_listener, service)
		.with_graceful_shutdown(signals::shutdown())
		.await?;

	warn!("closing database connections");
	pool.close().await;

	Ok(())
}

/// Errors returned by [`run()`].
#[derive(Debug, thiserror::Error)]
pub enum RunError
{
	/// We failed to set up the database.
	#[error("failed to initialize database: {0}")]
	Database(#[from] ConnectError),

	/// Some I/O failure, e.g. binding the TCP socket.
	#[error(transparent)]
	Io(#[from] io::Error),
}
