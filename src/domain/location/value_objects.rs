use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Coordinates Value Object
// ============================================================================

/// Geographic coordinates returned by the geocoding provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub lat: f64,
  pub lon: f64,
}

impl fmt::Display for Coordinates {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.lat, self.lon)
  }
}

// ============================================================================
// LocationSpec Value Object
// ============================================================================

/// How a registration request refers to a location: a free-text place
/// name to resolve, or the id of an existing record to reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSpec {
  /// Place name, looked up by exact name or geocoded and created
  ByName(String),
  /// Id of an existing location record
  ById(Uuid),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_coordinates_display() {
    let coords = Coordinates { lat: 1.5, lon: -2.25 };
    assert_eq!(coords.to_string(), "(1.5, -2.25)");
  }
}
