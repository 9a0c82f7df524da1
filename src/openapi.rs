//! The API's OpenAPI document.

use utoipa::OpenApi;

use crate::services::index::{Status, http as index};
use crate::services::series::{Serie, SerieFields, SerieId, SerieRequest, http as series};

#[derive(Debug, OpenApi)]
#[openapi(
	info(title = "series-api", license(name = "GPL-3.0")),
	paths(
		index::get_status,
		series::get_series,
		series::create_serie,
		series::get_serie,
		series::update_serie,
		series::delete_serie,
	),
	components(schemas(Status, SerieId, SerieFields, Serie, SerieRequest)),
	tags(
		(name = "Index", description = "liveness probe"),
		(name = "Series", description = "CRUD operations on series"),
	),
)]
pub struct Schema;

/// Renders the document as pretty-printed JSON.
pub fn json() -> Result<String, serde_json::Error>
{
	Schema::openapi().to_pretty_json()
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	#[test]
	fn documents_every_route() -> testing::Result
	{
		let schema: serde_json::Value = serde_json::from_str(&json()?)?;
		let paths = &schema["paths"];

		testing::assert!(paths["/"]["get"].is_object());
		testing::assert!(paths["/serie/"]["get"].is_object());
		testing::assert!(paths["/serie/"]["post"].is_object());

		for method in ["get", "put", "delete"] {
			testing::assert!(paths["/serie/{serie_id}"][method].is_object(), "{method}");
		}

		testing::assert_eq!(schema["info"]["title"], "series-api");
		testing::assert!(format!("{Schema:?}").contains("Schema"));

		Ok(())
	}
}
