//! Festival lookup endpoint

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use sqlx::Connection;

use crate::db::{connect, FestivalRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{DistrictName, HolidayDate};

/// Query parameters for the lookup. Both are required; axum rejects the
/// request with a 400 when either is missing.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub holidaydate: String,
    pub district: String,
}

/// GET /festivals/ - holiday names matching a date/district pair
///
/// Returns a JSON array of distinct names in alphabetical order. A pair
/// that matches nothing is a 404, not an empty list.
async fn get_festivals(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let date = HolidayDate::new(&params.holidaydate)?;
    let district = DistrictName::new(&params.district)?;

    // One connection per request, closed before the response is built.
    let mut conn = connect(state.db()).await?;
    let result = FestivalRepo::new(&mut conn)
        .find_by_date_and_district(&date, &district)
        .await;
    let _ = conn.close().await;

    let names = result?;
    if names.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(names))
}

/// Festival routes
pub fn router() -> Router<AppState> {
    Router::new().route("/festivals/", get(get_festivals))
}
