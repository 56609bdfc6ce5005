//! Asthma event endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{AsthmaEvent, AsthmaEventResponse, LogEventRequest};
use persistence::repositories::{AsthmaEventRepository, NewAsthmaEvent};
use shared::pagination::EventCursor;

/// Default page size for the event feed.
const DEFAULT_PAGE_SIZE: i64 = 50;

/// Maximum page size for the event feed.
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for listing events.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub limit: Option<i64>,
    pub cursor: Option<String>,
}

/// Response payload for the event feed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
    pub events: Vec<AsthmaEventResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub total: i64,
}

/// Log a new asthma event.
///
/// POST /log-event
pub async fn log_event(
    State(state): State<AppState>,
    Json(request): Json<LogEventRequest>,
) -> Result<(StatusCode, Json<AsthmaEventResponse>), ApiError> {
    request.validate()?;

    // The 1-31 day check admits dates like Feb 31; resolving against the
    // calendar happens here.
    let recorded_at = Utc
        .with_ymd_and_hms(
            request.year,
            request.month as u32,
            request.day as u32,
            request.hour as u32,
            0,
            0,
        )
        .single()
        .ok_or_else(|| ApiError::Validation("Date does not exist in the calendar".to_string()))?;

    let repo = AsthmaEventRepository::new(state.pool.clone());
    let entity = repo
        .create(NewAsthmaEvent {
            latitude: request.latitude,
            longitude: request.longitude,
            place: request.place,
            year: request.year,
            month: request.month,
            day: request.day,
            hour: request.hour,
            symptoms: request.symptoms,
            temperature: request.reading.temperature,
            humidity: request.reading.humidity,
            wind_speed: request.reading.wind_speed,
            pm25: request.reading.pm25,
            pm10: request.reading.pm10,
            no2: request.reading.no2,
            co: request.reading.co,
            european_aqi: request.european_aqi,
            recorded_at,
        })
        .await?;

    let event: AsthmaEvent = entity.into();
    let response: AsthmaEventResponse = event.into();

    info!(
        event_id = %response.event_id,
        place = %response.place,
        "Asthma event logged"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// List logged events, newest first.
///
/// GET /get-events?limit=<n>&cursor=<cursor>
///
/// Returns an empty page (not an error) when nothing has been logged.
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let after = match &query.cursor {
        Some(cursor) => {
            let cursor = EventCursor::parse(cursor)
                .map_err(|e| ApiError::Validation(format!("Invalid cursor: {}", e)))?;
            Some((cursor.recorded_at, cursor.id))
        }
        None => None,
    };

    let repo = AsthmaEventRepository::new(state.pool.clone());

    // Fetch one extra row to detect a further page.
    let mut entities = repo.list_page(after, limit + 1).await?;
    let has_more = entities.len() as i64 > limit;
    if has_more {
        entities.truncate(limit as usize);
    }

    let next_cursor = if has_more {
        entities.last().map(|e| {
            EventCursor {
                recorded_at: e.recorded_at,
                id: e.id,
            }
            .encode()
        })
    } else {
        None
    };

    let total = repo.count().await?;

    let events: Vec<AsthmaEventResponse> = entities
        .into_iter()
        .map(|e| {
            let event: AsthmaEvent = e.into();
            event.into()
        })
        .collect();

    Ok(Json(ListEventsResponse {
        events,
        next_cursor,
        total,
    }))
}

/// Get a single event by ID.
///
/// GET /get-events/:event_id
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<AsthmaEventResponse>, ApiError> {
    let repo = AsthmaEventRepository::new(state.pool.clone());
    let entity = repo
        .find_by_event_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let event: AsthmaEvent = entity.into();
    Ok(Json(event.into()))
}
