pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::Location;
pub use errors::{GeocodeError, LocationError};
pub use value_objects::{Coordinates, LocationSpec};
