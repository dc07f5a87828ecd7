use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::location::{
  entities::Location, errors::LocationError, ports::LocationRepository,
};

/// PostgreSQL implementation of the LocationRepository trait
pub struct PostgresLocationRepository {
  pool: PgPool,
}

impl PostgresLocationRepository {
  /// Creates a new instance of PostgresLocationRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for the locations table
#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
  id: Uuid,
  name: String,
  lat: f64,
  lon: f64,
  created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
  fn from(row: LocationRow) -> Self {
    Location::from_db(row.id, row.name, row.lat, row.lon, row.created_at)
  }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {
  async fn create(&self, location: Location) -> Result<Location, LocationError> {
    let result = sqlx::query_as::<_, LocationRow>(
      r#"
            INSERT INTO locations (id, name, lat, lon, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, lat, lon, created_at
            "#,
    )
    .bind(location.id)
    .bind(&location.name)
    .bind(location.lat)
    .bind(location.lon)
    .bind(location.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(result.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, LocationError> {
    let result = sqlx::query_as::<_, LocationRow>(
      r#"
            SELECT id, name, lat, lon, created_at
            FROM locations
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(Some(row)) => Ok(Some(row.into())),
      Ok(None) => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Location>, LocationError> {
    let result = sqlx::query_as::<_, LocationRow>(
      r#"
            SELECT id, name, lat, lon, created_at
            FROM locations
            WHERE name = $1
            "#,
    )
    .bind(name)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(Some(row)) => Ok(Some(row.into())),
      Ok(None) => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  async fn list_all(&self) -> Result<Vec<Location>, LocationError> {
    let rows = sqlx::query_as::<_, LocationRow>(
      r#"
            SELECT id, name, lat, lon, created_at
            FROM locations
            ORDER BY name
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }
}
