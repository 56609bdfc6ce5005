//! Asthma event repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AsthmaEventEntity;
use crate::metrics::QueryTimer;

/// Insert payload for a new asthma event.
#[derive(Debug, Clone)]
pub struct NewAsthmaEvent {
    pub latitude: f64,
    pub longitude: f64,
    pub place: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub symptoms: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub co: f64,
    pub european_aqi: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

/// Repository for asthma-event database operations.
#[derive(Clone)]
pub struct AsthmaEventRepository {
    pool: PgPool,
}

impl AsthmaEventRepository {
    /// Creates a new AsthmaEventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event row.
    pub async fn create(&self, event: NewAsthmaEvent) -> Result<AsthmaEventEntity, sqlx::Error> {
        let _timer = QueryTimer::start("create_asthma_event");
        sqlx::query_as::<_, AsthmaEventEntity>(
            r#"
            INSERT INTO asthma_events (latitude, longitude, place, year, month, day, hour,
                                       symptoms, temperature, humidity, wind_speed,
                                       pm25, pm10, no2, co, european_aqi, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(event.latitude)
        .bind(event.longitude)
        .bind(&event.place)
        .bind(event.year)
        .bind(event.month)
        .bind(event.day)
        .bind(event.hour)
        .bind(&event.symptoms)
        .bind(event.temperature)
        .bind(event.humidity)
        .bind(event.wind_speed)
        .bind(event.pm25)
        .bind(event.pm10)
        .bind(event.no2)
        .bind(event.co)
        .bind(event.european_aqi)
        .bind(event.recorded_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Find an event by its public UUID.
    pub async fn find_by_event_id(
        &self,
        event_id: Uuid,
    ) -> Result<Option<AsthmaEventEntity>, sqlx::Error> {
        let _timer = QueryTimer::start("find_asthma_event_by_id");
        sqlx::query_as::<_, AsthmaEventEntity>(
            r#"
            SELECT * FROM asthma_events WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// List events newest first, optionally resuming after a cursor position.
    ///
    /// Fetches `limit` rows; callers pass `limit + 1` to detect whether a
    /// further page exists.
    pub async fn list_page(
        &self,
        after: Option<(DateTime<Utc>, i64)>,
        limit: i64,
    ) -> Result<Vec<AsthmaEventEntity>, sqlx::Error> {
        let _timer = QueryTimer::start("list_asthma_events");
        if let Some((recorded_at, id)) = after {
            sqlx::query_as::<_, AsthmaEventEntity>(
                r#"
                SELECT * FROM asthma_events
                WHERE (recorded_at, id) < ($1, $2)
                ORDER BY recorded_at DESC, id DESC
                LIMIT $3
                "#,
            )
            .bind(recorded_at)
            .bind(id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, AsthmaEventEntity>(
                r#"
                SELECT * FROM asthma_events
                ORDER BY recorded_at DESC, id DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        }
    }

    /// Count all stored events.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let _timer = QueryTimer::start("count_asthma_events");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM asthma_events
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }
}
