use async_trait::async_trait;

use crate::domain::account::errors::{AccountError, HashError};
use crate::domain::account::ports::PasswordHasher;
use crate::domain::account::value_objects::{Password, PasswordHash};

/// bcrypt password hasher implementation
///
/// bcrypt salts internally, so every hash of the same password differs.
/// The work factor comes from configuration (`security.bcrypt_cost`,
/// default 10).
pub struct BcryptPasswordHasher {
  cost: u32,
}

impl BcryptPasswordHasher {
  /// Creates a new BcryptPasswordHasher with the given work factor
  pub fn new(cost: u32) -> Self {
    Self { cost }
  }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError> {
    let hash = bcrypt::hash(password.as_str(), self.cost)
      .map_err(|e| AccountError::Hash(HashError::HashingFailed(e.to_string())))?;

    Ok(PasswordHash::from_hash(hash))
  }

  async fn verify(
    &self,
    password: &str,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError> {
    bcrypt::verify(password, hashed_password.as_str())
      .map_err(|e| AccountError::Hash(HashError::VerificationFailed(e.to_string())))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // MIN_COST keeps the tests fast; production cost comes from config.
  // bcrypt's own MIN_COST (4) is private, so mirror its value here.
  const MIN_COST: u32 = 4;

  fn hasher() -> BcryptPasswordHasher {
    BcryptPasswordHasher::new(MIN_COST)
  }

  #[tokio::test]
  async fn test_hash_password() {
    let password = Password::new("abc123!").unwrap();

    let hash = hasher().hash(&password).await.unwrap();
    assert!(!hash.as_str().is_empty());
    assert!(hash.as_str().starts_with("$2"));
  }

  #[tokio::test]
  async fn test_verify_correct_password() {
    let password = Password::new("abc123!").unwrap();

    let hash = hasher().hash(&password).await.unwrap();
    assert!(hasher().verify("abc123!", &hash).await.unwrap());
  }

  #[tokio::test]
  async fn test_verify_incorrect_password() {
    let password = Password::new("abc123!").unwrap();

    let hash = hasher().hash(&password).await.unwrap();
    assert!(!hasher().verify("wrong1!", &hash).await.unwrap());
  }

  #[tokio::test]
  async fn test_hash_produces_different_salts() {
    let password = Password::new("abc123!").unwrap();

    let hash1 = hasher().hash(&password).await.unwrap();
    let hash2 = hasher().hash(&password).await.unwrap();

    // Same password, different salts
    assert_ne!(hash1.as_str(), hash2.as_str());
    assert!(hasher().verify("abc123!", &hash1).await.unwrap());
    assert!(hasher().verify("abc123!", &hash2).await.unwrap());
  }

  #[tokio::test]
  async fn test_verify_invalid_hash_format() {
    let hash = PasswordHash::from_hash("not-a-bcrypt-hash");
    let result = hasher().verify("abc123!", &hash).await;
    assert!(matches!(
      result,
      Err(AccountError::Hash(HashError::VerificationFailed(_)))
    ));
  }
}
