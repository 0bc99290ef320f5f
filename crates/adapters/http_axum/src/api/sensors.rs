//! JSON handlers for sensors.

use std::str::FromStr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use sensorhub_app::ports::SensorRepository;
use sensorhub_domain::id::SensorId;
use sensorhub_domain::sensor::Sensor;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Sensor>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and record endpoints.
pub enum GetResponse {
    Ok(Json<Sensor>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /sensors`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Result<ListResponse, ApiError>
where
    SR: SensorRepository + Send + Sync + 'static,
{
    let sensors = state.sensor_service.list_sensors().await?;
    Ok(ListResponse::Ok(Json(sensors)))
}

/// `GET /sensors/:id`
pub async fn get<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SensorRepository + Send + Sync + 'static,
{
    let sensor_id = SensorId::from_str(&id)?;
    let sensor = state.sensor_service.get_sensor(sensor_id).await?;
    Ok(GetResponse::Ok(Json(sensor)))
}

/// `POST /sensors/:id/data`
///
/// The body is read leniently: a request not declared as JSON, a blank
/// body, or a JSON document that is not an object carries no value and is
/// answered like `{}`. Only unparseable JSON is rejected outright.
pub async fn record_value<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<GetResponse, ApiError>
where
    SR: SensorRepository + Send + Sync + 'static,
{
    let sensor_id = SensorId::from_str(&id)?;
    let value = submitted_value(&headers, &body)?;
    let updated = state
        .sensor_service
        .record_value(sensor_id, value)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// Extract the raw `value` field from a POST body, if there is one.
fn submitted_value(headers: &HeaderMap, body: &[u8]) -> Result<Option<Value>, ApiError> {
    if !is_json(headers) || body.trim_ascii().is_empty() {
        return Ok(None);
    }
    match serde_json::from_slice(body)? {
        Value::Object(mut fields) => Ok(fields.remove("value")),
        _ => Ok(None),
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
