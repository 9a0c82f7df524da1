use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

/// A unique identifier for a [`Serie`].
///
/// Always a positive integer; assigned by the database.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	derive_more::Display,
	derive_more::Into,
	Serialize,
	sqlx::Type,
	utoipa::ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
#[schema(example = 1)]
pub struct SerieId(i64);

impl SerieId
{
	/// Returns [`None`] if `value` is not positive.
	pub fn new(value: i64) -> Option<Self>
	{
		(value > 0).then_some(Self(value))
	}

	pub fn get(self) -> i64
	{
		self.0
	}
}

impl<'de> Deserialize<'de> for SerieId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		use serde::de::{Error, Unexpected};

		let value = i64::deserialize(deserializer)?;

		Self::new(value)
			.ok_or_else(|| Error::invalid_value(Unexpected::Signed(value), &"a positive integer"))
	}
}

/// The descriptive fields of a serie.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct SerieFields
{
	/// The serie's title.
	#[schema(min_length = 1, max_length = 100, example = "Example")]
	pub name: String,

	/// When the first episode aired.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub release_date: Option<Date>,

	/// A score between 0 and 10.
	#[serde(skip_serializing_if = "Option::is_none")]
	#[schema(minimum = 0.0, maximum = 10.0)]
	pub rating: Option<f64>,

	/// A free-form genre, e.g. "drama".
	#[serde(skip_serializing_if = "Option::is_none")]
	#[schema(max_length = 50)]
	pub category: Option<String>,
}

/// A stored serie.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Serie
{
	pub id: SerieId,

	#[serde(flatten)]
	#[sqlx(flatten)]
	pub fields: SerieFields,
}

/// Request payload for creating or replacing a serie.
///
/// Every field is optional at the deserialization level so that a missing `name` is reported as
/// a validation error alongside all the others. An `id` member is ignored.
#[derive(Debug, Default, Clone, Deserialize, garde::Validate, utoipa::ToSchema)]
pub struct SerieRequest
{
	#[garde(required, length(min = 1, max = 100))]
	#[schema(required = true, min_length = 1, max_length = 100, example = "Example")]
	pub name: Option<String>,

	#[garde(skip)]
	pub release_date: Option<Date>,

	#[garde(range(min = 0.0, max = 10.0))]
	#[schema(minimum = 0.0, maximum = 10.0)]
	pub rating: Option<f64>,

	#[garde(length(max = 50))]
	#[schema(max_length = 50)]
	pub category: Option<String>,
}

impl SerieRequest
{
	/// Validates the payload and extracts the fields to store.
	pub fn into_fields(self) -> Result<SerieFields, ValidationErrors>
	{
		garde::Validate::validate(&self)?;

		let Self { name, release_date, rating, category } = self;
		let name = name.ok_or_else(|| ValidationErrors::single("name", "not set"))?;

		Ok(SerieFields { name, release_date, rating, category })
	}
}

/// Per-field validation errors.
///
/// Maps each invalid field's name to the list of problems found with it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors
{
	fn single(field: &str, message: &str) -> Self
	{
		Self(BTreeMap::from_iter([(field.to_owned(), vec![message.to_owned()])]))
	}

	pub fn fields(&self) -> impl Iterator<Item = &str>
	{
		self.0.keys().map(String::as_str)
	}

	pub fn get(&self, field: &str) -> Option<&[String]>
	{
		self.0.get(field).map(Vec::as_slice)
	}
}

impl fmt::Display for ValidationErrors
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str("invalid value for ")?;

		for (idx, field) in self.fields().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}

			write!(f, "`{field}`")?;
		}

		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

impl From<garde::Report> for ValidationErrors
{
	fn from(report: garde::Report) -> Self
	{
		let mut errors = BTreeMap::<String, Vec<String>>::new();

		for (path, error) in report.iter() {
			errors
				.entry(path.to_string())
				.or_default()
				.push(error.message().to_owned());
		}

		Self(errors)
	}
}

#[cfg(test)]
mod tests
{
	use time::macros::date;

	use super::*;
	use crate::testing;

	fn parse(json: serde_json::Value) -> testing::Result<SerieRequest>
	{
		Ok(serde_json::from_value(json)?)
	}

	#[test]
	fn name_alone_is_enough() -> testing::Result
	{
		let fields = parse(serde_json::json!({ "name": "Example" }))?.into_fields()?;

		testing::assert_eq!(fields.name, "Example");
		testing::assert!(fields.release_date.is_none());
		testing::assert!(fields.rating.is_none());
		testing::assert!(fields.category.is_none());

		Ok(())
	}

	#[test]
	fn accepts_every_field() -> testing::Result
	{
		let fields = parse(serde_json::json!({
			"id": 99,
			"name": "Example",
			"release_date": "2008-01-20",
			"rating": 9.5,
			"category": "drama",
		}))?
		.into_fields()?;

		testing::assert_eq!(fields.release_date, Some(date!(2008 - 01 - 20)));
		testing::assert_eq!(fields.rating, Some(9.5));
		testing::assert_eq!(fields.category.as_deref(), Some("drama"));

		Ok(())
	}

	#[test]
	fn missing_name_is_reported() -> testing::Result
	{
		let Err(errors) = parse(serde_json::json!({ "rating": 5 }))?.into_fields() else {
			testing::bail!("payload without a name passed validation");
		};

		testing::assert_eq!(errors.fields().collect::<Vec<_>>(), ["name"]);

		Ok(())
	}

	#[test]
	fn every_invalid_field_is_reported() -> testing::Result
	{
		let Err(errors) = parse(serde_json::json!({
			"name": "",
			"rating": 11.0,
			"category": "x".repeat(51),
		}))?
		.into_fields() else {
			testing::bail!("invalid payload passed validation");
		};

		testing::assert_eq!(errors.fields().collect::<Vec<_>>(), ["category", "name", "rating"]);
		testing::assert!(errors.get("name").is_some_and(|messages| !messages.is_empty()));

		Ok(())
	}

	#[test]
	fn bounds_are_inclusive() -> testing::Result
	{
		for rating in [0.0, 10.0] {
			let request = SerieRequest {
				name: Some("x".repeat(100)),
				rating: Some(rating),
				category: Some("y".repeat(50)),
				..Default::default()
			};

			request.into_fields()?;
		}

		Ok(())
	}

	#[test]
	fn unset_fields_are_not_serialized() -> testing::Result
	{
		let serie = Serie {
			id: SerieId(1),
			fields: SerieFields {
				name: String::from("Example"),
				release_date: None,
				rating: None,
				category: None,
			},
		};

		testing::assert_eq!(
			serde_json::to_value(&serie)?,
			serde_json::json!({ "id": 1, "name": "Example" }),
		);

		Ok(())
	}

	#[test]
	fn ids_must_be_positive()
	{
		assert!(serde_json::from_str::<SerieId>("1").is_ok());
		assert!(serde_json::from_str::<SerieId>("0").is_err());
		assert!(serde_json::from_str::<SerieId>("-3").is_err());
	}

	#[test]
	fn display_lists_fields()
	{
		let errors = ValidationErrors(BTreeMap::from_iter([
			(String::from("name"), vec![String::from("not set")]),
			(String::from("rating"), vec![String::from("too large")]),
		]));

		assert_eq!(errors.to_string(), "invalid value for `name`, `rating`");
	}
}
