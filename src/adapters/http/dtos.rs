use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::location::value_objects::LocationSpec;

/// Request for user registration
///
/// Wire field names keep the original API contract (Portuguese keys);
/// internal names are the domain vocabulary.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  /// User's display name
  #[serde(rename = "nome")]
  #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
  pub name: String,

  /// User's email address
  #[serde(rename = "gmail")]
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// User's password
  #[serde(rename = "senha")]
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,

  /// Password confirmation
  #[serde(rename = "repetirSenha")]
  pub password_confirmation: String,

  /// Business registration number (CNPJ)
  #[serde(rename = "cnpj")]
  #[validate(length(min = 1, message = "CNPJ is required"))]
  pub tax_id: String,

  /// Location as a free-text name or a reference to an existing record
  #[serde(rename = "localizacao")]
  pub location: LocationSpecDto,
}

/// Location specifier as it appears on the wire: a bare JSON string
/// (place name) or an object carrying the id of an existing location.
/// Any other shape fails deserialization and becomes a 400.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LocationSpecDto {
  Name(String),
  Reference { id: Uuid },
}

impl From<LocationSpecDto> for LocationSpec {
  fn from(dto: LocationSpecDto) -> Self {
    match dto {
      LocationSpecDto::Name(name) => LocationSpec::ByName(name),
      LocationSpecDto::Reference { id } => LocationSpec::ById(id),
    }
  }
}

/// Request for user login
///
/// Carries no validation: a malformed email or empty password is just a
/// failed credential check downstream
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
  /// User's email address
  #[serde(rename = "gmail")]
  pub email: String,

  /// User's password
  #[serde(rename = "senha")]
  pub password: String,
}

/// External-facing view of a user
///
/// A projection distinct from the storage entity: the password hash is
/// not part of this type and can never serialize.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
  /// Unique identifier of the user
  pub id: Uuid,

  /// User's display name
  #[serde(rename = "nome")]
  pub name: String,

  /// User's email address
  #[serde(rename = "gmail")]
  pub email: String,

  /// Business registration number
  #[serde(rename = "cnpj")]
  pub tax_id: String,

  /// Id of the user's location
  #[serde(rename = "localizacaoId")]
  pub location_id: Uuid,
}

/// Response after successful user registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  /// Confirmation message
  pub message: String,

  /// The created user, without the stored hash
  pub user: UserView,
}

/// Response after successful user login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  /// Confirmation message
  pub message: String,

  /// The authenticated user, without the stored hash
  pub user: UserView,
}

/// Location record as returned by the query endpoints
#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
  pub id: Uuid,
  pub name: String,
  pub lat: f64,
  pub lon: f64,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}
