use actix_web::web;
use std::sync::Arc;

use crate::application::account::{LoginUserUseCase, RegisterUserUseCase};
use crate::application::location::{GetUserLocationUseCase, ListLocationsUseCase};

use super::handlers::account::{login_handler, register_handler};
use super::handlers::location::{get_user_location_handler, list_locations_handler};

/// Configure the service routes
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - POST /login - Authenticate with email and password
/// - GET /locations - List all location records
/// - GET /user/{id}/location - Look up a user's registered location
pub fn configure_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterUserUseCase>,
  login_use_case: Arc<LoginUserUseCase>,
  list_locations_use_case: Arc<ListLocationsUseCase>,
  get_user_location_use_case: Arc<GetUserLocationUseCase>,
) {
  // Store use cases in app data so handlers can access them
  cfg
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(login_use_case))
    .app_data(web::Data::new(list_locations_use_case))
    .app_data(web::Data::new(get_user_location_use_case))
    // Configure routes
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler))
    .route("/locations", web::get().to(list_locations_handler))
    .route(
      "/user/{id}/location",
      web::get().to(get_user_location_handler),
    );
}
