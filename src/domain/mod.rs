pub mod account;
pub mod location;
