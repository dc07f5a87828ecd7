use std::sync::Arc;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::services::AccountService;
use crate::domain::account::value_objects::Email;

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  /// User's email address
  pub email: String,
  /// User's password (plain text)
  pub password: String,
}

/// Response after successful user login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  /// Unique identifier of the user
  pub user_id: Uuid,
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// Business registration number
  pub tax_id: String,
  /// Id of the user's location
  pub location_id: Uuid,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  account_service: Arc<AccountService>,
}

impl LoginUserUseCase {
  /// Creates a new instance of LoginUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the user login use case
  ///
  /// # Errors
  /// Returns `AccountError::InvalidCredentials` for an unknown email or
  /// a wrong password, without distinguishing the two
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AccountError> {
    // A malformed email cannot belong to a registered user; collapse it
    // into the same credential error to avoid enumeration hints
    let email = Email::new(command.email).map_err(|_| AccountError::InvalidCredentials)?;

    let user = self.account_service.login(email, command.password).await?;

    Ok(LoginUserResponse {
      user_id: user.id,
      name: user.name,
      email: user.email,
      tax_id: user.tax_id,
      location_id: user.location_id,
    })
  }
}
