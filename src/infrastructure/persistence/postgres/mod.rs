pub mod location_repository;
pub mod user_repository;

pub use location_repository::PostgresLocationRepository;
pub use user_repository::PostgresUserRepository;
