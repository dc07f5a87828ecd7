use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::Coordinates;

/// Location entity with geocoded coordinates
///
/// Locations are created lazily during registration and shared by id:
/// many users may reference the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
  /// Unique identifier for the location
  pub id: Uuid,
  /// Human-readable place name (unique)
  pub name: String,
  /// Latitude in decimal degrees
  pub lat: f64,
  /// Longitude in decimal degrees
  pub lon: f64,
  /// Timestamp when the location was created
  pub created_at: DateTime<Utc>,
}

impl Location {
  /// Creates a new location from a place name and resolved coordinates
  pub fn new(name: String, coordinates: Coordinates) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      lat: coordinates.lat,
      lon: coordinates.lon,
      created_at: Utc::now(),
    }
  }

  /// Creates a location from database fields (for reconstruction)
  pub fn from_db(id: Uuid, name: String, lat: f64, lon: f64, created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      name,
      lat,
      lon,
      created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_location_creation() {
    let location = Location::new(
      "Curitiba".to_string(),
      Coordinates {
        lat: -25.4284,
        lon: -49.2733,
      },
    );

    assert_eq!(location.name, "Curitiba");
    assert_eq!(location.lat, -25.4284);
    assert_eq!(location.lon, -49.2733);
  }
}
