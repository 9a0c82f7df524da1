//! A service to manage series.

use std::sync::Arc;

mod models;
pub use models::{Serie, SerieFields, SerieId, SerieRequest, ValidationErrors};

mod repository;
pub use repository::SerieRepository;

pub mod get_series;
pub mod create_serie;
pub mod get_serie;
pub mod update_serie;
pub mod delete_serie;
pub mod http;


/// A service to manage series.
#[derive(Debug, Clone)]
pub struct SerieService
{
	repository: Arc<dyn SerieRepository>,
}

impl SerieService
{
	/// Creates a new [`SerieService`] storing its data in `repository`.
	pub fn new(repository: impl SerieRepository + 'static) -> Self
	{
		Self { repository: Arc::new(repository) }
	}
}
