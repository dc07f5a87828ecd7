use thiserror::Error;

use crate::domain::account::errors::RepositoryError;

/// Main location error type
#[derive(Debug, Error)]
pub enum LocationError {
  #[error("User not found")]
  UserNotFound,

  #[error("User has no associated location")]
  NotFound,

  #[error("Referenced location does not exist")]
  InvalidReference,

  #[error("Geocoding error: {0}")]
  Geocode(#[from] GeocodeError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

/// Errors from the external geocoding provider
#[derive(Debug, Error)]
pub enum GeocodeError {
  #[error("No results for place name")]
  NotFound,

  #[error("Geocoding provider request failed: {0}")]
  Upstream(String),
}

impl From<sqlx::Error> for LocationError {
  fn from(error: sqlx::Error) -> Self {
    LocationError::Repository(RepositoryError::from(error))
  }
}
