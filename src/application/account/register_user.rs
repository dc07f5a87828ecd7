use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::errors::{AccountError, ValidationError};
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::Email;
use crate::domain::location::value_objects::LocationSpec;

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
  /// Password confirmation, must match `password`
  pub password_confirmation: String,
  /// Business registration number (CNPJ)
  pub tax_id: String,
  /// Location given by name or by existing record id
  pub location: LocationSpec,
}

/// Response after successful user registration
///
/// Deliberately excludes the password hash: the stored entity is never
/// returned to callers as-is.
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  /// Unique identifier of the newly created user
  pub user_id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// Business registration number
  pub tax_id: String,
  /// Id of the resolved location
  pub location_id: Uuid,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the user registration use case
  ///
  /// # Errors
  /// Returns `AccountError` if registration fails (password mismatch,
  /// duplicate email, policy violation, unresolvable location)
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, AccountError> {
    // Confirmation is checked before anything else
    if command.password != command.password_confirmation {
      return Err(ValidationError::PasswordMismatch.into());
    }

    // Parse and validate email
    let email = Email::new(command.email)?;

    let user = self
      .account_service
      .register(
        email,
        command.password,
        command.name,
        command.tax_id,
        command.location,
      )
      .await?;

    Ok(RegisterUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
      tax_id: user.tax_id,
      location_id: user.location_id,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::account::entities::User;
  use crate::domain::account::ports::{PasswordHasher, UserRepository};
  use crate::domain::account::value_objects::{Password, PasswordHash};
  use crate::domain::location::entities::Location;
  use crate::domain::location::errors::{GeocodeError, LocationError};
  use crate::domain::location::ports::{Geocoder, LocationRepository};
  use crate::domain::location::services::LocationService;
  use crate::domain::location::value_objects::Coordinates;
  use async_trait::async_trait;

  // Ports that fail the test when reached; boundary checks must reject
  // the command before any of them run
  struct UnreachableUserRepository;

  #[async_trait]
  impl UserRepository for UnreachableUserRepository {
    async fn create(&self, _user: User) -> Result<User, AccountError> {
      panic!("user repository must not be reached");
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, AccountError> {
      panic!("user repository must not be reached");
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, AccountError> {
      panic!("user repository must not be reached");
    }
  }

  struct UnreachableLocationRepository;

  #[async_trait]
  impl LocationRepository for UnreachableLocationRepository {
    async fn create(&self, _location: Location) -> Result<Location, LocationError> {
      panic!("location repository must not be reached");
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Location>, LocationError> {
      panic!("location repository must not be reached");
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Location>, LocationError> {
      panic!("location repository must not be reached");
    }

    async fn list_all(&self) -> Result<Vec<Location>, LocationError> {
      panic!("location repository must not be reached");
    }
  }

  struct UnreachableGeocoder;

  #[async_trait]
  impl Geocoder for UnreachableGeocoder {
    async fn resolve(&self, _place_name: &str) -> Result<Coordinates, GeocodeError> {
      panic!("geocoder must not be reached");
    }
  }

  struct UnreachableHasher;

  #[async_trait]
  impl PasswordHasher for UnreachableHasher {
    async fn hash(&self, _password: &Password) -> Result<PasswordHash, AccountError> {
      panic!("hasher must not be reached");
    }

    async fn verify(
      &self,
      _password: &str,
      _hashed_password: &PasswordHash,
    ) -> Result<bool, AccountError> {
      panic!("hasher must not be reached");
    }
  }

  fn use_case() -> RegisterUserUseCase {
    let user_repo = Arc::new(UnreachableUserRepository);
    let locations = Arc::new(LocationService::new(
      Arc::new(UnreachableLocationRepository),
      user_repo.clone(),
      Arc::new(UnreachableGeocoder),
    ));
    RegisterUserUseCase::new(Arc::new(AccountService::new(
      user_repo,
      Arc::new(UnreachableHasher),
      locations,
    )))
  }

  fn command() -> RegisterUserCommand {
    RegisterUserCommand {
      name: "Ana".to_string(),
      email: "ana@x.com".to_string(),
      password: "abc123!".to_string(),
      password_confirmation: "abc123!".to_string(),
      tax_id: "123".to_string(),
      location: LocationSpec::ByName("Curitiba".to_string()),
    }
  }

  #[tokio::test]
  async fn test_execute_rejects_mismatched_confirmation_before_anything_else() {
    let result = use_case()
      .execute(RegisterUserCommand {
        password_confirmation: "abc124!".to_string(),
        ..command()
      })
      .await;

    assert!(matches!(
      result,
      Err(AccountError::Validation(ValidationError::PasswordMismatch))
    ));
  }

  #[tokio::test]
  async fn test_execute_rejects_invalid_email_before_the_service() {
    let result = use_case()
      .execute(RegisterUserCommand {
        email: "not-an-email".to_string(),
        ..command()
      })
      .await;

    assert!(matches!(
      result,
      Err(AccountError::Validation(ValidationError::InvalidEmail))
    ));
  }
}
