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

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use color_eyre::eyre::{self, WrapErr};
use series_api::Config;

mod cli;

const DEFAULT_CONFIG_PATH: &str = "./series-api.toml";

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	// `.env` files are optional
	let _ = dotenvy::dotenv();

	let serve_args = match cli::args().command() {
		cli::Command::Serve(serve_args) => serve_args,
		cli::Command::GenerateOpenApiSchema => {
			let schema = series_api::openapi::json().wrap_err("failed to serialize schema")?;
			writeln!(io::stdout(), "{schema}")?;
			return Ok(());
		},
	};

	let mut config = load_config(serve_args.config_path.as_deref())?;
	serve_args.apply_to(&mut config);

	let _guard = series_api::logging::init(&config.tracing).wrap_err("failed to initialize tracing")?;
	series_api::logging::install_panic_hook();

	let mut runtime = tokio::runtime::Builder::new_multi_thread();

	if let Some(worker_threads) = config.runtime.worker_threads {
		runtime.worker_threads(worker_threads.get());
	}

	runtime
		.enable_all()
		.build()
		.wrap_err("failed to build tokio runtime")?
		.block_on(series_api::run(config))
		.wrap_err("failed to run server")
}

fn load_config(path: Option<&Path>) -> eyre::Result<Config>
{
	let path = match path {
		Some(path) => path,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => Path::new(DEFAULT_CONFIG_PATH),
		None => return Ok(Config::default()),
	};

	let text = fs::read_to_string(path)
		.wrap_err_with(|| format!("failed to read config file at `{}`", path.display()))?;

	Config::from_toml(&text)
		.wrap_err_with(|| format!("failed to parse config file at `{}`", path.display()))
}
