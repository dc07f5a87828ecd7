use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::account::errors::AccountError;
use crate::domain::location::errors::{GeocodeError, LocationError};

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Caller-fixable input problem (400 Bad Request)
  Validation(String),

  /// Bad credentials (401 Unauthorized), deliberately carrying no
  /// detail about which part of the credentials was wrong
  Unauthorized,

  /// Geocoding provider failure (502 Bad Gateway)
  Upstream(String),

  /// Store failure or unexpected error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Unauthorized => write!(f, "Unauthorized"),
      ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Unauthorized => ("invalid_credentials", "Invalid credentials".to_string()),
      ApiError::Upstream(msg) => {
        // Provider detail is logged, the caller sees a fixed message
        tracing::error!("Geocoding provider error: {}", msg);
        (
          "geocoding_unavailable",
          "Could not resolve location at this time".to_string(),
        )
      }
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert AccountError to ApiError
impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    match error {
      AccountError::InvalidCredentials => ApiError::Unauthorized,
      AccountError::EmailAlreadyExists => {
        ApiError::Validation("Email already registered".to_string())
      }
      AccountError::UserNotFound => ApiError::Validation("User not found".to_string()),
      AccountError::Validation(err) => ApiError::Validation(err.to_string()),
      AccountError::Location(err) => ApiError::from(err),
      AccountError::Repository(err) => ApiError::Internal(err.to_string()),
      AccountError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert LocationError to ApiError
impl From<LocationError> for ApiError {
  fn from(error: LocationError) -> Self {
    match error {
      LocationError::UserNotFound | LocationError::NotFound => {
        ApiError::Validation("User or location not found".to_string())
      }
      LocationError::InvalidReference => {
        ApiError::Validation("Referenced location does not exist".to_string())
      }
      LocationError::Geocode(GeocodeError::NotFound) => {
        ApiError::Validation("Location not found".to_string())
      }
      LocationError::Geocode(GeocodeError::Upstream(msg)) => ApiError::Upstream(msg),
      LocationError::Repository(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::errors::{RepositoryError, ValidationError};

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
      ApiError::Upstream("test".to_string()).status_code(),
      StatusCode::BAD_GATEWAY
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_invalid_credentials_maps_to_401() {
    let api_error: ApiError = AccountError::InvalidCredentials.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);
  }

  #[test]
  fn test_duplicate_email_maps_to_400() {
    let api_error: ApiError = AccountError::EmailAlreadyExists.into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn test_password_policy_violation_maps_to_400() {
    let api_error: ApiError =
      AccountError::Validation(ValidationError::PasswordMissingDigit).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn test_location_errors_map_to_400() {
    for error in [
      LocationError::UserNotFound,
      LocationError::NotFound,
      LocationError::InvalidReference,
      LocationError::Geocode(GeocodeError::NotFound),
    ] {
      let api_error: ApiError = error.into();
      assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
    }
  }

  #[test]
  fn test_geocoding_upstream_maps_to_502() {
    let api_error: ApiError =
      LocationError::Geocode(GeocodeError::Upstream("timeout".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_GATEWAY);
  }

  #[test]
  fn test_repository_errors_map_to_500() {
    let api_error: ApiError =
      AccountError::Repository(RepositoryError::QueryFailed("boom".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
