use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserView},
  errors::ApiError,
};
use crate::application::account::{
  LoginUserCommand, LoginUserResponse as UseCaseLoginResponse, LoginUserUseCase,
  RegisterUserCommand, RegisterUserResponse as UseCaseRegisterResponse, RegisterUserUseCase,
};

/// Handler for user registration
///
/// POST /register
/// Body: RegisterRequest (JSON)
/// Response: RegisterResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  // Validate request
  request.validate()?;

  let request = request.into_inner();
  let command = RegisterUserCommand {
    name: request.name,
    email: request.email,
    password: request.password,
    password_confirmation: request.password_confirmation,
    tax_id: request.tax_id,
    location: request.location.into(),
  };

  // Execute use case
  let response: UseCaseRegisterResponse = use_case.execute(command).await?;

  let api_response = RegisterResponse {
    message: "User registered successfully".to_string(),
    user: UserView {
      id: response.user_id,
      name: response.name,
      email: response.email,
      tax_id: response.tax_id,
      location_id: response.location_id,
    },
  };

  Ok(HttpResponse::Created().json(api_response))
}

/// Handler for user login
///
/// POST /login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  // A malformed email is treated as bad credentials, not a validation hint
  let request = request.into_inner();
  let command = LoginUserCommand {
    email: request.email,
    password: request.password,
  };

  // Execute use case
  let response: UseCaseLoginResponse = use_case.execute(command).await?;

  let api_response = LoginResponse {
    message: "Login successful".to_string(),
    user: UserView {
      id: response.user_id,
      name: response.name,
      email: response.email,
      tax_id: response.tax_id,
      location_id: response.location_id,
    },
  };

  Ok(HttpResponse::Ok().json(api_response))
}
