//! Query string helpers shared by the holiday handlers.
//!
//! Every endpoint takes its input from the query string as a flat
//! key/value map. Numeric values that are missing or malformed are
//! rejected with `AppError::BadRequest`; missing text values are empty.

use std::collections::HashMap;
use std::str::FromStr;

use holiday_core::HolidayDraft;

use crate::error::AppError;

pub type QueryParams = HashMap<String, String>;

fn parse<T: FromStr>(params: &QueryParams, key: &str) -> Result<T, AppError> {
    let raw = params
        .get(key)
        .ok_or_else(|| AppError::BadRequest(format!("missing parameter '{}'", key)))?;

    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("malformed parameter '{}': {:?}", key, raw)))
}

pub fn id(params: &QueryParams) -> Result<i64, AppError> {
    parse(params, "id")
}

pub fn rating(params: &QueryParams) -> Result<i32, AppError> {
    parse(params, "rating")
}

/// `inf` and `NaN` parse as floats but have no JSON form, so they are refused.
pub fn price(params: &QueryParams) -> Result<f64, AppError> {
    let price: f64 = parse(params, "price")?;
    if !price.is_finite() {
        return Err(AppError::BadRequest(format!("price is not finite: {}", price)));
    }
    Ok(price)
}

pub fn text(params: &QueryParams, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

/// Split a comma joined photo list, dropping trailing empty entries.
pub fn split_photos(raw: &str) -> Vec<String> {
    let mut photos: Vec<String> = raw.split(',').map(str::to_string).collect();
    while photos.last().is_some_and(|p| p.is_empty()) {
        photos.pop();
    }
    photos
}

/// Collect the fields shared by create and update.
pub fn draft(params: &QueryParams) -> Result<HolidayDraft, AppError> {
    Ok(HolidayDraft {
        title: text(params, "title"),
        country: text(params, "country"),
        city: text(params, "city"),
        duration: text(params, "duration"),
        season: text(params, "season"),
        description: text(params, "description"),
        price: price(params)?,
        photos: split_photos(&text(params, "photos")),
    })
}
