use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::engine::AnalysisEngine;
use crate::filter::FilterParams;
use crate::server::error::ApiError;
use crate::types::record::AnalyzedString;
use crate::types::response::{NaturalLanguageResponse, StringsResponse};

pub type AppState = Arc<AnalysisEngine>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// `POST /strings`
pub async fn create_string(
    State(engine): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let fields = body
        .as_object()
        .ok_or_else(|| ApiError::BadRequest("Request body must be a JSON object".to_string()))?;

    if let Some(extra) = fields.keys().find(|key| key.as_str() != "value") {
        return Err(ApiError::BadRequest(format!("property {extra} should not exist")));
    }

    let value = match fields.get("value") {
        None | Some(Value::Null) => {
            return Err(ApiError::BadRequest(
                "Value field is required and cannot be empty".to_string(),
            ))
        }
        Some(Value::String(value)) => value,
        Some(_) => {
            return Err(ApiError::UnprocessableEntity(
                "Value must be a string".to_string(),
            ))
        }
    };

    let record = engine.submit(value)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /strings`
pub async fn list_strings(
    State(engine): State<AppState>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<StringsResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Json(engine.filter(&params)?))
}

/// `GET /strings/filter-by-natural-language`
pub async fn filter_by_natural_language(
    State(engine): State<AppState>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let query = params
        .query
        .filter(|query| !query.is_empty())
        .ok_or_else(|| ApiError::BadRequest("query should not be empty".to_string()))?;

    Ok(Json(engine.filter_natural_language(&query)?))
}

/// `GET /strings/:value`
pub async fn get_string(
    State(engine): State<AppState>,
    value: Result<Path<String>, PathRejection>,
) -> Result<Json<AnalyzedString>, ApiError> {
    let Path(value) = value.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Json(engine.get(&value)?))
}

/// `DELETE /strings/:value`
pub async fn delete_string(
    State(engine): State<AppState>,
    value: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(value) = value.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    engine.delete(&value)?;
    Ok(StatusCode::NO_CONTENT)
}
