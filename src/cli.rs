use std::net::IpAddr;
use std::path::Path;

use url::Url;

/// series-api
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub(crate) struct Args
{
	/// What you want to do
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command
{
	/// Run the HTTP server
	#[command(name = "serve")]
	Serve(ServeArgs),

	/// Print the API's OpenAPI schema as JSON
	#[command(name = "generate-openapi-schema")]
	GenerateOpenApiSchema,
}

#[derive(Debug, Default, clap::Args)]
pub(crate) struct ServeArgs
{
	/// Path to the configuration file
	///
	/// Defaults to `./series-api.toml` if that file exists.
	#[arg(long = "config")]
	pub(crate) config_path: Option<Box<Path>>,

	/// The IP address the server should listen on
	#[arg(long = "ip")]
	pub(crate) ip_addr: Option<IpAddr>,

	/// The port the server should listen on
	#[arg(long)]
	pub(crate) port: Option<u16>,

	/// URL of the SQLite database
	#[arg(long, env = "DATABASE_URL")]
	pub(crate) database_url: Option<Url>,
}

pub(crate) fn args() -> Args
{
	<Args as clap::Parser>::parse()
}

impl Args
{
	/// The command to run, defaulting to `serve`.
	pub(crate) fn command(self) -> Command
	{
		self.command
			.unwrap_or_else(|| Command::Serve(ServeArgs::default()))
	}
}

impl ServeArgs
{
	/// Overrides values in `config` with the ones passed on the command line.
	pub(crate) fn apply_to(self, config: &mut series_api::Config)
	{
		if let Some(ip_addr) = self.ip_addr {
			config.http.ip = ip_addr;
		}

		if let Some(port) = self.port {
			config.http.port = port;
		}

		if let Some(database_url) = self.database_url {
			config.database.url = database_url;
		}
	}
}
