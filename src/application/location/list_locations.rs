use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::location::errors::LocationError;
use crate::domain::location::services::LocationService;

#[derive(Debug, Serialize)]
pub struct LocationDto {
  pub id: Uuid,
  pub name: String,
  pub lat: f64,
  pub lon: f64,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ListLocationsResponse {
  pub locations: Vec<LocationDto>,
}

/// Use case for listing all locations
pub struct ListLocationsUseCase {
  location_service: Arc<LocationService>,
}

impl ListLocationsUseCase {
  pub fn new(location_service: Arc<LocationService>) -> Self {
    Self { location_service }
  }

  pub async fn execute(&self) -> Result<ListLocationsResponse, LocationError> {
    let locations = self.location_service.list_all().await?;

    let location_dtos = locations
      .into_iter()
      .map(|l| LocationDto {
        id: l.id,
        name: l.name,
        lat: l.lat,
        lon: l.lon,
        created_at: l.created_at,
      })
      .collect();

    Ok(ListLocationsResponse {
      locations: location_dtos,
    })
  }
}
