use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::params::{self, QueryParams};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/createHoliday", post(create_holiday).fallback(crate::not_found))
        .route("/getHoliday", get_only(get(get_holiday)))
        .route("/getHolidays", get_only(get(get_holidays)))
        .route("/updateHoliday", post(update_holiday).fallback(crate::not_found))
        .route("/deleteHoliday", post(delete_holiday).fallback(crate::not_found))
        .route("/rateHoliday", post(rate_holiday).fallback(crate::not_found))
        .route("/resetRatings", post(reset_ratings).fallback(crate::not_found))
}

/// axum serves HEAD through a GET handler unless HEAD has its own route.
fn get_only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.head(crate::not_found).fallback(crate::not_found)
}

fn json_response<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_string(value).map_err(anyhow::Error::from)?;
    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /createHoliday
pub async fn create_holiday(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<String, AppError> {
    let draft = params::draft(&params)?;
    let holiday = state.store.create(draft).await?;

    Ok(format!("Holiday has been created successfully with id {}", holiday.id))
}

/// GET /getHoliday
/// Refreshes the average rating before answering.
pub async fn get_holiday(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Response, AppError> {
    let id = params::id(&params)?;
    let holiday = state
        .store
        .refresh_average(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("holiday {}", id)))?;

    json_response(&holiday)
}

/// GET /getHolidays
pub async fn get_holidays(State(state): State<AppState>) -> Result<Response, AppError> {
    let holidays = state.store.all().await;
    json_response(&holidays)
}

/// POST /updateHoliday
pub async fn update_holiday(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<String, AppError> {
    let id = params::id(&params)?;
    let draft = params::draft(&params)?;
    state.store.update(id, draft).await?;

    Ok("Holiday has been updated successfully".to_string())
}

/// POST /deleteHoliday
pub async fn delete_holiday(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<String, AppError> {
    let id = params::id(&params)?;
    if !state.store.delete(id).await {
        return Err(AppError::NotFound(format!("holiday {}", id)));
    }

    Ok("Holiday has been deleted successfully".to_string())
}

/// POST /rateHoliday
pub async fn rate_holiday(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<StatusCode, AppError> {
    let id = params::id(&params)?;
    let rating = params::rating(&params)?;

    if !state.store.add_rating(id, rating).await? {
        return Err(AppError::NotFound(format!("holiday {}", id)));
    }

    Ok(StatusCode::OK)
}

/// POST /resetRatings
pub async fn reset_ratings(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<String, AppError> {
    let id = params::id(&params)?;
    if !state.store.reset_rating(id).await {
        return Err(AppError::NotFound(format!("holiday {}", id)));
    }

    Ok("Holiday rating has been reset".to_string())
}
