use std::sync::Arc;
use uuid::Uuid;

use super::entities::Location;
use super::errors::LocationError;
use super::ports::{Geocoder, LocationRepository};
use super::value_objects::LocationSpec;
use crate::domain::account::errors::{AccountError, RepositoryError};
use crate::domain::account::ports::UserRepository;

/// Location service implementing resolution and lookup logic
pub struct LocationService {
  location_repo: Arc<dyn LocationRepository>,
  user_repo: Arc<dyn UserRepository>,
  geocoder: Arc<dyn Geocoder>,
}

impl LocationService {
  /// Creates a new instance of LocationService
  pub fn new(
    location_repo: Arc<dyn LocationRepository>,
    user_repo: Arc<dyn UserRepository>,
    geocoder: Arc<dyn Geocoder>,
  ) -> Self {
    Self {
      location_repo,
      user_repo,
      geocoder,
    }
  }

  /// Resolves a location spec to an existing or newly created location
  ///
  /// Name specs reference the record with that exact name when one
  /// exists; otherwise the name is geocoded and a new record created.
  /// Id specs must reference an existing record.
  ///
  /// # Errors
  /// Returns `LocationError::InvalidReference` for an unknown id and
  /// `LocationError::Geocode` when the provider cannot resolve the name
  pub async fn resolve_spec(&self, spec: &LocationSpec) -> Result<Location, LocationError> {
    match spec {
      LocationSpec::ByName(name) => {
        if let Some(existing) = self.location_repo.find_by_name(name).await? {
          return Ok(existing);
        }

        let coordinates = self.geocoder.resolve(name).await?;
        let location = Location::new(name.clone(), coordinates);

        match self.location_repo.create(location).await {
          Ok(created) => Ok(created),
          // Lost a concurrent create for the same name: reference the winner
          Err(LocationError::Repository(RepositoryError::DuplicateKey(_))) => self
            .location_repo
            .find_by_name(name)
            .await?
            .ok_or(LocationError::InvalidReference),
          Err(e) => Err(e),
        }
      }
      LocationSpec::ById(id) => self
        .location_repo
        .find_by_id(*id)
        .await?
        .ok_or(LocationError::InvalidReference),
    }
  }

  /// Returns all locations, unfiltered and unpaginated
  pub async fn list_all(&self) -> Result<Vec<Location>, LocationError> {
    self.location_repo.list_all().await
  }

  /// Returns the location referenced by the given user
  ///
  /// # Errors
  /// Returns `LocationError::UserNotFound` for an unknown user id and
  /// `LocationError::NotFound` when the referenced location is missing
  pub async fn for_user(&self, user_id: Uuid) -> Result<Location, LocationError> {
    let user = match self.user_repo.find_by_id(user_id).await {
      Ok(user) => user.ok_or(LocationError::UserNotFound)?,
      Err(AccountError::Repository(err)) => return Err(LocationError::Repository(err)),
      Err(_) => return Err(LocationError::UserNotFound),
    };

    self
      .location_repo
      .find_by_id(user.location_id)
      .await?
      .ok_or(LocationError::NotFound)
  }
}
