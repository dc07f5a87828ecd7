use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use super::errors::ValidationError;

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation
  pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
    let email = email.into();

    if !email.validate_email() {
      return Err(ValidationError::InvalidEmail);
    }

    // Normalize to lowercase
    Ok(Self(email.to_lowercase()))
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone)]
pub struct Password(String);

impl Password {
  const MIN_LENGTH: usize = 6;
  const SPECIAL_CHARS: &'static str = "!@#$%^&*";

  /// Creates a new Password after checking the registration policy:
  /// at least 6 characters with one letter, one digit, and one symbol
  /// from the fixed set `!@#$%^&*`.
  pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
    let password = password.into();

    if password.len() < Self::MIN_LENGTH {
      return Err(ValidationError::PasswordTooShort {
        min: Self::MIN_LENGTH,
      });
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
      return Err(ValidationError::PasswordMissingLetter);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
      return Err(ValidationError::PasswordMissingDigit);
    }

    if !password.chars().any(|c| Self::SPECIAL_CHARS.contains(c)) {
      return Err(ValidationError::PasswordMissingSpecial);
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// Implement Display without exposing the password
impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// PasswordHash Value Object (bcrypt hash)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Creates a PasswordHash from an existing hash string
  pub fn from_hash(hash: impl Into<String>) -> Self {
    Self(hash.into())
  }

  /// Returns the hash as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_email_validation() {
    // Valid emails
    assert!(Email::new("test@example.com").is_ok());
    assert!(Email::new("user.name@domain.co.uk").is_ok());

    // Invalid emails
    assert!(Email::new("invalid").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("test@").is_err());
  }

  #[test]
  fn test_email_normalization() {
    let email = Email::new("Ana@Example.COM").unwrap();
    assert_eq!(email.as_str(), "ana@example.com");
  }

  #[test]
  fn test_password_policy_accepts_compliant_password() {
    assert!(Password::new("abc123!").is_ok());
    assert!(Password::new("X9$aaaaa").is_ok());
  }

  #[test]
  fn test_password_policy_too_short() {
    assert!(matches!(
      Password::new("a1!"),
      Err(ValidationError::PasswordTooShort { min: 6 })
    ));
  }

  #[test]
  fn test_password_policy_missing_letter() {
    assert!(matches!(
      Password::new("123456!"),
      Err(ValidationError::PasswordMissingLetter)
    ));
  }

  #[test]
  fn test_password_policy_missing_digit() {
    assert!(matches!(
      Password::new("abcdef!"),
      Err(ValidationError::PasswordMissingDigit)
    ));
  }

  #[test]
  fn test_password_policy_missing_special() {
    assert!(matches!(
      Password::new("abc1234"),
      Err(ValidationError::PasswordMissingSpecial)
    ));

    // Symbols outside the fixed set do not count
    assert!(matches!(
      Password::new("abc123?"),
      Err(ValidationError::PasswordMissingSpecial)
    ));
  }

  #[test]
  fn test_password_debug_does_not_leak() {
    let password = Password::new("abc123!").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
    assert_eq!(password.to_string(), "***");
  }
}
