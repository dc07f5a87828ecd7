//! Location use cases
//!
//! Read-only lookups over location records.

mod get_user_location;
mod list_locations;

pub use get_user_location::{GetUserLocationCommand, GetUserLocationUseCase};
pub use list_locations::{ListLocationsResponse, ListLocationsUseCase, LocationDto};
