pub mod config;
pub mod geocoding;
pub mod persistence;
pub mod security;
