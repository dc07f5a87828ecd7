use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use georegistry::{
  adapters::http::configure_routes,
  application::account::{LoginUserUseCase, RegisterUserUseCase},
  application::location::{GetUserLocationUseCase, ListLocationsUseCase},
  domain::account::services::AccountService,
  domain::location::services::LocationService,
  infrastructure::{
    config::Config,
    geocoding::OpenCageGeocoder,
    persistence::postgres::{PostgresLocationRepository, PostgresUserRepository},
    security::BcryptPasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "georegistry=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting georegistry service");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Wire up infrastructure adapters
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let location_repo = Arc::new(PostgresLocationRepository::new(db_pool.clone()));
  let password_hasher = Arc::new(BcryptPasswordHasher::new(config.security.bcrypt_cost));
  let geocoder = Arc::new(
    OpenCageGeocoder::new(&config.geocoding).expect("Failed to create geocoding client"),
  );

  // Wire up domain services
  let location_service = Arc::new(LocationService::new(
    location_repo,
    user_repo.clone(),
    geocoder,
  ));
  let account_service = Arc::new(AccountService::new(
    user_repo,
    password_hasher,
    location_service.clone(),
  ));

  // Wire up use cases
  let register_use_case = Arc::new(RegisterUserUseCase::new(account_service.clone()));
  let login_use_case = Arc::new(LoginUserUseCase::new(account_service));
  let list_locations_use_case = Arc::new(ListLocationsUseCase::new(location_service.clone()));
  let get_user_location_use_case = Arc::new(GetUserLocationUseCase::new(location_service));

  let bind_address = (config.server.host.clone(), config.server.port);
  tracing::info!(
    "Starting HTTP server on {}:{}",
    config.server.host,
    config.server.port
  );

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .configure(|cfg: &mut web::ServiceConfig| {
        configure_routes(
          cfg,
          register_use_case.clone(),
          login_use_case.clone(),
          list_locations_use_case.clone(),
          get_user_location_use_case.clone(),
        )
      })
  })
  .bind(bind_address)?
  .run()
  .await
}
