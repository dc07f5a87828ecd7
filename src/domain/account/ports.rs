use async_trait::async_trait;
use uuid::Uuid;

use super::entities::User;
use super::errors::AccountError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository
  async fn create(&self, user: User) -> Result<User, AccountError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(&self, password: &str, hashed_password: &PasswordHash)
  -> Result<bool, AccountError>;
}
