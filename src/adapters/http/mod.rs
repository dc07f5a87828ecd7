pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  ErrorResponse, LocationResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
  UserView,
};
pub use errors::ApiError;
pub use routes::configure_routes;
