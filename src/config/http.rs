use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Configuration for the HTTP server.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HttpConfig
{
	/// The IP address the server should listen on.
	pub ip: IpAddr,

	/// The port the server should listen on.
	pub port: u16,
}

impl HttpConfig
{
	/// The address the server should bind to.
	pub fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip, self.port)
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self { ip: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 8000 }
	}
}
