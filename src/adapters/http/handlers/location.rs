use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::{dtos::LocationResponse, errors::ApiError};
use crate::application::location::{
  GetUserLocationCommand, GetUserLocationUseCase, ListLocationsUseCase,
};

/// Handler for listing all locations
///
/// GET /locations
/// Response: JSON array of LocationResponse with status 200
pub async fn list_locations_handler(
  use_case: web::Data<Arc<ListLocationsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  let locations: Vec<LocationResponse> = response
    .locations
    .into_iter()
    .map(|l| LocationResponse {
      id: l.id,
      name: l.name,
      lat: l.lat,
      lon: l.lon,
    })
    .collect();

  Ok(HttpResponse::Ok().json(locations))
}

/// Handler for looking up a user's registered location
///
/// GET /user/{id}/location
/// Response: LocationResponse (JSON) with status 200
pub async fn get_user_location_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetUserLocationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetUserLocationCommand {
    user_id: path.into_inner(),
  };

  let location = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(LocationResponse {
    id: location.id,
    name: location.name,
    lat: location.lat,
    lon: location.lon,
  }))
}
