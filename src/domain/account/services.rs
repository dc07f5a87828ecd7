use std::sync::Arc;

use super::entities::User;
use super::errors::{AccountError, RepositoryError};
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash};
use crate::domain::location::services::LocationService;
use crate::domain::location::value_objects::LocationSpec;

/// Account service implementing registration and authentication
pub struct AccountService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  locations: Arc<LocationService>,
}

impl AccountService {
  /// Creates a new instance of AccountService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    locations: Arc<LocationService>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      locations,
    }
  }

  /// Registers a new user
  ///
  /// Checks run in a fixed order: email uniqueness, password policy,
  /// password hashing, location resolution, persistence. The password
  /// confirmation check happens at the application boundary before the
  /// service is reached.
  ///
  /// # Errors
  /// Returns `AccountError::EmailAlreadyExists` for a registered email,
  /// `AccountError::Validation` for a policy violation, and
  /// `AccountError::Location` when the location spec cannot be resolved
  pub async fn register(
    &self,
    email: Email,
    password: String,
    name: String,
    tax_id: String,
    location: LocationSpec,
  ) -> Result<User, AccountError> {
    // Check if email already exists
    if self.user_repo.find_by_email(&email).await?.is_some() {
      return Err(AccountError::EmailAlreadyExists);
    }

    // Enforce the password policy, then hash
    let password = Password::new(password)?;
    let password_hash = self.password_hasher.hash(&password).await?;

    // Resolve the location spec to a concrete record
    let location = self.locations.resolve_spec(&location).await?;

    let user = User::new(
      name,
      email.into_inner(),
      password_hash.into_inner(),
      tax_id,
      location.id,
    );

    // The uniqueness check above races with concurrent registrations;
    // the unique index on email is the authority
    match self.user_repo.create(user).await {
      Ok(user) => Ok(user),
      Err(AccountError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(AccountError::EmailAlreadyExists)
      }
      Err(e) => Err(e),
    }
  }

  /// Authenticates a user with email and password
  ///
  /// Unknown email and wrong password produce the same
  /// `AccountError::InvalidCredentials` so callers cannot enumerate
  /// registered accounts from the error.
  pub async fn login(&self, email: Email, password: String) -> Result<User, AccountError> {
    let user = self
      .user_repo
      .find_by_email(&email)
      .await?
      .ok_or(AccountError::InvalidCredentials)?;

    let stored_hash = PasswordHash::from_hash(&user.password_hash);
    let is_valid = self.password_hasher.verify(&password, &stored_hash).await?;

    if !is_valid {
      return Err(AccountError::InvalidCredentials);
    }

    Ok(user)
  }
}
