use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Location;
use super::errors::{GeocodeError, LocationError};
use super::value_objects::Coordinates;

/// Repository trait for location persistence operations
#[async_trait]
pub trait LocationRepository: Send + Sync {
  /// Creates a new location in the repository
  async fn create(&self, location: Location) -> Result<Location, LocationError>;

  /// Finds a location by its unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, LocationError>;

  /// Finds a location by its exact name
  async fn find_by_name(&self, name: &str) -> Result<Option<Location>, LocationError>;

  /// Returns all locations
  async fn list_all(&self) -> Result<Vec<Location>, LocationError>;
}

/// Service trait for the external geocoding provider
///
/// Implementations take the first result for the given place name.
/// No retries, no caching.
#[async_trait]
pub trait Geocoder: Send + Sync {
  /// Resolves a place name to geographic coordinates
  async fn resolve(&self, place_name: &str) -> Result<Coordinates, GeocodeError>;
}
