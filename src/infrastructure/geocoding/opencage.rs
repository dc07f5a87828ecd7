use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::location::errors::GeocodeError;
use crate::domain::location::ports::Geocoder;
use crate::domain::location::value_objects::Coordinates;
use crate::infrastructure::config::GeocodingConfig;

/// Geocoder backed by an OpenCage-compatible forward-geocoding API
///
/// Issues a single request per resolution and takes the first result.
/// No retries, no caching; the request carries a bounded timeout.
pub struct OpenCageGeocoder {
  client: reqwest::Client,
  base_url: String,
  api_key: String,
}

/// Response envelope from the provider
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
  results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
  geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
  lat: f64,
  lng: f64,
}

impl OpenCageGeocoder {
  /// Creates a new geocoder from provider configuration
  pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_seconds))
      .build()
      .map_err(|e| GeocodeError::Upstream(e.to_string()))?;

    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key.clone(),
    })
  }

  fn first_coordinates(response: GeocodeResponse) -> Result<Coordinates, GeocodeError> {
    response
      .results
      .into_iter()
      .next()
      .map(|result| Coordinates {
        lat: result.geometry.lat,
        lon: result.geometry.lng,
      })
      .ok_or(GeocodeError::NotFound)
  }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
  async fn resolve(&self, place_name: &str) -> Result<Coordinates, GeocodeError> {
    let url = format!("{}/geocode/v1/json", self.base_url);

    let response = self
      .client
      .get(&url)
      .query(&[
        ("q", place_name),
        ("key", self.api_key.as_str()),
        ("limit", "1"),
      ])
      .send()
      .await
      .map_err(|e| GeocodeError::Upstream(e.to_string()))?;

    if !response.status().is_success() {
      return Err(GeocodeError::Upstream(format!(
        "provider returned status {}",
        response.status()
      )));
    }

    let body: GeocodeResponse = response
      .json()
      .await
      .map_err(|e| GeocodeError::Upstream(e.to_string()))?;

    Self::first_coordinates(body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_provider_response_takes_first_result() {
    let json = r#"
        {
            "results": [
                { "geometry": { "lat": -25.4284, "lng": -49.2733 } },
                { "geometry": { "lat": 0.0, "lng": 0.0 } }
            ],
            "status": { "code": 200, "message": "OK" }
        }
        "#;

    let response: GeocodeResponse = serde_json::from_str(json).unwrap();
    let coordinates = OpenCageGeocoder::first_coordinates(response).unwrap();

    assert_eq!(coordinates.lat, -25.4284);
    assert_eq!(coordinates.lon, -49.2733);
  }

  #[test]
  fn test_parse_provider_response_empty_results() {
    let json = r#"{ "results": [] }"#;

    let response: GeocodeResponse = serde_json::from_str(json).unwrap();
    let result = OpenCageGeocoder::first_coordinates(response);

    assert!(matches!(result, Err(GeocodeError::NotFound)));
  }

  #[test]
  fn test_base_url_trailing_slash_is_trimmed() {
    let config = GeocodingConfig {
      base_url: "https://api.opencagedata.com/".to_string(),
      api_key: "k".to_string(),
      timeout_seconds: 10,
    };

    let geocoder = OpenCageGeocoder::new(&config).unwrap();
    assert_eq!(geocoder.base_url, "https://api.opencagedata.com");
  }
}
