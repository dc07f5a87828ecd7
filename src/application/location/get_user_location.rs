use std::sync::Arc;
use uuid::Uuid;

use super::list_locations::LocationDto;
use crate::domain::location::errors::LocationError;
use crate::domain::location::services::LocationService;

#[derive(Debug, Clone)]
pub struct GetUserLocationCommand {
  pub user_id: Uuid,
}

/// Use case for looking up the location a user registered with
pub struct GetUserLocationUseCase {
  location_service: Arc<LocationService>,
}

impl GetUserLocationUseCase {
  pub fn new(location_service: Arc<LocationService>) -> Self {
    Self { location_service }
  }

  /// # Errors
  /// Returns `LocationError::UserNotFound` or `LocationError::NotFound`
  /// when the user or its location is absent
  pub async fn execute(&self, command: GetUserLocationCommand) -> Result<LocationDto, LocationError> {
    let location = self.location_service.for_user(command.user_id).await?;

    Ok(LocationDto {
      id: location.id,
      name: location.name,
      lat: location.lat,
      lon: location.lon,
      created_at: location.created_at,
    })
  }
}
