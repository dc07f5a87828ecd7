use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address (unique)
  pub email: String,
  /// Salted bcrypt password hash
  pub password_hash: String,
  /// Business registration number (CNPJ)
  pub tax_id: String,
  /// Reference to the user's location
  pub location_id: Uuid,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user referencing an already resolved location
  pub fn new(
    name: String,
    email: String,
    password_hash: String,
    tax_id: String,
    location_id: Uuid,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      password_hash,
      tax_id,
      location_id,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    tax_id: String,
    location_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      email,
      password_hash,
      tax_id,
      location_id,
      created_at,
      updated_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_user_creation() {
    let location_id = Uuid::new_v4();
    let user = User::new(
      "Ana".to_string(),
      "ana@x.com".to_string(),
      "$2b$10$hash".to_string(),
      "123".to_string(),
      location_id,
    );

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
    assert_eq!(user.location_id, location_id);
    assert_eq!(user.created_at, user.updated_at);
  }

  #[test]
  fn test_user_reconstruction_keeps_identity() {
    let id = Uuid::new_v4();
    let location_id = Uuid::new_v4();
    let now = Utc::now();
    let user = User::from_db(
      id,
      "Ana".to_string(),
      "ana@x.com".to_string(),
      "$2b$10$hash".to_string(),
      "123".to_string(),
      location_id,
      now,
      now,
    );

    assert_eq!(user.id, id);
    assert_eq!(user.location_id, location_id);
  }
}
